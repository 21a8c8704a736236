//! Solid wall materials and the material property dataset.

use crate::error::{PropsError, PropsResult};
use mc_core::{ensure_finite, ensure_positive};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// File name of the bundled dataset (properties at 21 °C).
pub const BUNDLED_DATASET_NAME: &str = "thermal_constants_21c.json";

const BUNDLED_DATASET: &str = include_str!("../data/thermal_constants_21c.json");

/// One row of the material dataset, with the dataset's column names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Density (g/cm3)")]
    pub density: f64,
    #[serde(rename = "Thermal Conductivity (W/cm-K)")]
    pub conductivity: f64,
    #[serde(rename = "Specific Heat (J/g-K)")]
    pub specific_heat: f64,
    #[serde(rename = "Linear Expansion (um/cm/C)")]
    pub linear_expansion: f64,
}

/// A resolved wall material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    density: f64,
    conductivity: f64,
    specific_heat: f64,
    linear_expansion: f64,
}

impl Material {
    /// Build a material from explicit properties.
    pub fn new(
        name: impl Into<String>,
        density: f64,
        conductivity: f64,
        specific_heat: f64,
        linear_expansion: f64,
    ) -> PropsResult<Self> {
        Ok(Self {
            name: name.into(),
            density: ensure_positive(density, "material density")?,
            conductivity: ensure_positive(conductivity, "material conductivity")?,
            specific_heat: ensure_positive(specific_heat, "material specific heat")?,
            linear_expansion: ensure_finite(linear_expansion, "material linear expansion")?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Density [g/cm³]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Thermal conductivity [W/(cm·K)]
    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    /// Specific heat [J/(g·K)]
    pub fn specific_heat(&self) -> f64 {
        self.specific_heat
    }

    /// Linear expansion [µm/(cm·°C)]
    pub fn linear_expansion(&self) -> f64 {
        self.linear_expansion
    }
}

impl TryFrom<MaterialRecord> for Material {
    type Error = PropsError;

    fn try_from(record: MaterialRecord) -> Result<Self, Self::Error> {
        Material::new(
            record.name,
            record.density,
            record.conductivity,
            record.specific_heat,
            record.linear_expansion,
        )
    }
}

/// Materials keyed by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    by_key: HashMap<String, Material>,
}

impl MaterialLibrary {
    /// The dataset compiled into the crate.
    pub fn bundled() -> PropsResult<Self> {
        Self::from_json_str(BUNDLED_DATASET, BUNDLED_DATASET_NAME)
    }

    /// Load a dataset from disk. The file is read once and closed.
    pub fn load(path: impl AsRef<Path>) -> PropsResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| PropsError::DatasetUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        let library = Self::from_json_str(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            materials = library.len(),
            "loaded material dataset"
        );
        Ok(library)
    }

    /// Parse a JSON array of [`MaterialRecord`]s. `origin` labels parse errors.
    pub fn from_json_str(json: &str, origin: &str) -> PropsResult<Self> {
        let records: Vec<MaterialRecord> =
            serde_json::from_str(json).map_err(|source| PropsError::DatasetParse {
                origin: origin.to_owned(),
                source,
            })?;
        Self::from_records(records)
    }

    pub fn from_records(records: impl IntoIterator<Item = MaterialRecord>) -> PropsResult<Self> {
        let mut by_key = HashMap::new();
        for record in records {
            let material = Material::try_from(record)?;
            let key = material.name.to_lowercase();
            if by_key.contains_key(&key) {
                return Err(PropsError::DuplicateMaterial {
                    name: material.name,
                });
            }
            by_key.insert(key, material);
        }
        Ok(Self { by_key })
    }

    /// Case-insensitive exact-name lookup.
    pub fn get(&self, name: &str) -> PropsResult<&Material> {
        self.by_key
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| PropsError::UnknownMaterial {
                name: name.to_owned(),
            })
    }

    /// Like [`get`](Self::get), returning an owned material.
    pub fn resolve(&self, name: &str) -> PropsResult<Material> {
        self.get(name).cloned()
    }

    /// All material names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_key.values().map(|m| m.name.clone()).collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
