use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use ordersift_core::{ExtractionRules, FailurePolicy};
use ordersift_providers::AnnotationFormat;

const CONFIG_DIR: &str = "ordersift";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    /// Transcripts to process; empty means every transcript in the annotation file.
    #[serde(default = "Config::default_transcripts")]
    pub transcripts: Vec<String>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            transcripts: Self::default_transcripts(),
            output: OutputConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Parser output for the transcripts (CoNLL-U or spaCy JSON).
    #[serde(default = "InputConfig::default_annotations")]
    pub annotations: PathBuf,
    #[serde(default)]
    pub format: AnnotationFormat,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            annotations: Self::default_annotations(),
            format: AnnotationFormat::default(),
        }
    }
}

impl InputConfig {
    fn default_annotations() -> PathBuf {
        PathBuf::from("annotations.conllu")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_path")]
    pub path: PathBuf,
    /// Also echo the results to stdout.
    #[serde(default = "OutputConfig::default_print")]
    pub print: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            print: Self::default_print(),
        }
    }
}

impl OutputConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("optimized_annotations.json")
    }

    const fn default_print() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ExtractionConfig {
    #[serde(flatten)]
    pub rules: ExtractionRules,
    #[serde(default)]
    pub on_parser_failure: FailurePolicy,
}

impl Config {
    fn default_transcripts() -> Vec<String> {
        [
            "Hi, I'd like to order two cheeseburgers and one large fries. Can you also add a Coke?",
            "Can I get three pepperoni pizzas and one vegetarian pizza, please?",
            "I need one chicken sandwich combo with medium fries and a Sprite.",
            "Please send me two chocolate milkshakes and one vanilla milkshake.",
            "I'd like four burgers, two with extra cheese and two without onions, along with three large fries.",
            "Can you add one margherita pizza and a bottle of water to my order?",
            "I want three tacos, one beef, one chicken, and one vegetarian, with extra salsa.",
            "Give me two pasta dishes—one Alfredo and one marinara—and a garlic bread.",
            "I'd like to order five samosas and two bottles of lemonade.",
            "Can I get one large pepperoni pizza with extra olives and a side of garlic knots?",
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `~/ordersift/config.json`.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'ordersift init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read config {}: {e}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else the home config if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let home_config = Self::config_path()?;
        if home_config.exists() {
            Self::load_from(&home_config)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Export parser output for your transcripts as CoNLL-U or spaCy JSON");
        println!("   2. Point input.annotations at that file");
        println!("   3. Run 'ordersift extract'");
        println!();
        println!("🔧 Configuration options:");
        println!("   - input.format: auto, conllu or spacy_json");
        println!("   - transcripts: leave empty to process every annotated transcript");
        println!("   - extraction.item_entity_labels: entity labels treated as ordered items");
        println!("   - extraction.on_parser_failure: abort or skip");
        println!();
        Ok(())
    }

    /// Write the default configuration to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }
}
