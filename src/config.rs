use crate::error::{ColormapError, Result};
use crate::models::ColorStop;
use crate::raster::check_dimensions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "../src/main/resources/assets/tfc/textures/colormap/";

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            summary: true,
        }
    }
}

/// One rendered image: file name and its anchor points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub name: String,
    pub stops: Vec<ColorStop>,
}

/// A verbatim duplicate of an already rendered image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopySpec {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColormapTable {
    pub width: u32,
    pub height: u32,
    pub images: Vec<ImageSpec>,
    #[serde(default)]
    pub copies: Vec<CopySpec>,
}

// (x, y, colour) literals for the shipped colormaps.
type Literal = (u32, u32, &'static str);

const SKY: &[Literal] = &[
    (0, 0, "#6697E7"),
    (255, 0, "#7ca5f7"),
    (0, 255, "#dec797"),
    (255, 255, "#ABAAE3"),
    (64, 64, "#6597CE"),
];
const FOG: &[Literal] = &[
    (0, 0, "#8FB1E9"),
    (255, 0, "#b4a1e7"),
    (0, 255, "#EDCC97"),
    (255, 255, "#d7d6f6"),
    (64, 64, "#b0d2f7"),
];
const WATER: &[Literal] = &[(0, 0, "#4882C9"), (255, 0, "#273968")];
const GRASS: &[Literal] = &[
    (0, 0, "#217C3E"),
    (255, 0, "#827759"),
    (0, 255, "#AFA83B"),
    (255, 255, "#A8833F"),
    (192, 0, "#729985"),
];
// Second stop has no '#'; the parser accepts it with a warning.
const FOLIAGE: &[Literal] = &[
    (0, 0, "#1D6233"),
    (255, 0, "57776D"),
    (0, 255, "#8EA825"),
    (255, 255, "#9C8733"),
];
const FOLIAGE_FALL: &[Literal] = &[
    (0, 0, "#E8594C"),
    (255, 0, "#A85019"),
    (0, 255, "#E89740"),
    (255, 255, "#E0BA31"),
];
const FOLIAGE_WINTER: &[Literal] = &[(0, 0, "#7C592B")];

const BUILTIN_IMAGES: &[(&str, &[Literal])] = &[
    ("sky.png", SKY),
    ("fog.png", FOG),
    ("water.png", WATER),
    ("grass.png", GRASS),
    ("foliage.png", FOLIAGE),
    ("foliage_fall.png", FOLIAGE_FALL),
    ("foliage_winter.png", FOLIAGE_WINTER),
];

impl ColormapTable {
    /// The shipped sky/fog/water/grass/foliage colormaps.
    pub fn builtin() -> Result<Self> {
        let images = BUILTIN_IMAGES
            .iter()
            .map(|(name, literals)| {
                let stops = literals
                    .iter()
                    .map(|&(x, y, hex)| ColorStop::parse(x, y, hex))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ImageSpec {
                    name: name.to_string(),
                    stops,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ColormapTable {
            width: 256,
            height: 256,
            images,
            copies: vec![CopySpec {
                from: "water.png".to_string(),
                to: "water_fog.png".to_string(),
            }],
        })
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ColormapError::fs(path, e))?;
        let table: ColormapTable =
            serde_json::from_str(&content).map_err(|source| ColormapError::Table {
                path: path.to_path_buf(),
                source,
            })?;
        table.validate()?;
        Ok(table)
    }

    /// Reject tables the rasterizer or copy step would fail on halfway through a run.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;

        let mut produced = HashSet::new();
        for image in &self.images {
            if image.stops.is_empty() {
                return Err(ColormapError::InvalidInput(format!(
                    "'{}' has no colour stops",
                    image.name
                )));
            }
            if !produced.insert(image.name.as_str()) {
                return Err(ColormapError::InvalidInput(format!(
                    "'{}' is listed twice",
                    image.name
                )));
            }
        }
        for copy in &self.copies {
            if !produced.contains(copy.from.as_str()) {
                return Err(ColormapError::InvalidInput(format!(
                    "copy source '{}' is not produced before '{}'",
                    copy.from, copy.to
                )));
            }
            if !produced.insert(copy.to.as_str()) {
                return Err(ColormapError::InvalidInput(format!(
                    "'{}' is listed twice",
                    copy.to
                )));
            }
        }
        Ok(())
    }

    /// Every file a build writes, rendered images first, then copies.
    pub fn output_names(&self) -> Vec<&str> {
        self.images
            .iter()
            .map(|i| i.name.as_str())
            .chain(self.copies.iter().map(|c| c.to.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_builtin_table() {
        let table = ColormapTable::builtin().unwrap();
        assert_eq!((table.width, table.height), (256, 256));
        assert_eq!(
            table.output_names(),
            vec![
                "sky.png",
                "fog.png",
                "water.png",
                "grass.png",
                "foliage.png",
                "foliage_fall.png",
                "foliage_winter.png",
                "water_fog.png",
            ]
        );
        table.validate().unwrap();

        let foliage = &table.images[4];
        assert_eq!(foliage.stops[1], ColorStop::new(255, 0, Rgb([0x57, 0x77, 0x6d])));
        assert_eq!(table.images[6].stops.len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let base = ColormapTable::builtin().unwrap();

        let mut t = base.clone();
        t.width = 0;
        assert!(matches!(t.validate(), Err(ColormapError::InvalidInput(_))));

        let mut t = base.clone();
        t.width = u32::MAX;
        t.height = u32::MAX;
        assert!(matches!(t.validate(), Err(ColormapError::InvalidInput(_))));

        let mut t = base.clone();
        t.images[0].stops.clear();
        assert!(matches!(t.validate(), Err(ColormapError::InvalidInput(_))));

        let mut t = base.clone();
        t.copies[0].from = "lava.png".to_string();
        assert!(matches!(t.validate(), Err(ColormapError::InvalidInput(_))));

        let mut t = base.clone();
        t.copies[0].to = "sky.png".to_string();
        assert!(matches!(t.validate(), Err(ColormapError::InvalidInput(_))));
    }

    #[test]
    fn test_json_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        let table = ColormapTable::builtin().unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&table).unwrap()).unwrap();

        assert_eq!(ColormapTable::from_json_file(&path).unwrap(), table);
    }

    #[test]
    fn test_json_table_without_copies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.json");
        std::fs::write(
            &path,
            r##"{"width": 8, "height": 4, "images": [{"name": "a.png", "stops": [{"x": 0, "y": 0, "color": "#102030"}]}]}"##,
        )
        .unwrap();

        let table = ColormapTable::from_json_file(&path).unwrap();
        assert!(table.copies.is_empty());
        assert_eq!(table.output_names(), vec!["a.png"]);
    }

    #[test]
    fn test_json_table_with_huge_raster_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.json");
        std::fs::write(
            &path,
            r##"{"width": 4294967295, "height": 4294967295, "images": [{"name": "a.png", "stops": [{"x": 0, "y": 0, "color": "#102030"}]}]}"##,
        )
        .unwrap();
        assert!(matches!(
            ColormapTable::from_json_file(&path),
            Err(ColormapError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_json_table_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ColormapTable::from_json_file(&path),
            Err(ColormapError::Table { .. })
        ));
        assert!(matches!(
            ColormapTable::from_json_file(dir.path().join("missing.json")),
            Err(ColormapError::Filesystem { .. })
        ));
    }
}
