use crate::error::{AppError, Result};
use crate::models::{
    default_tips, ApplianceUsage, BudgetState, ConsumptionSeries, EnergyTip, Reading,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Dashboard inputs supplied by the host. Nothing here has a process-wide default;
/// callers load or build a `Config` and pass it down explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub header: HeaderConfig,
    pub reading: Reading,
    pub budget: BudgetState,
    #[serde(default)]
    pub appliances: Vec<ApplianceUsage>,
    #[serde(default)]
    pub series: ConsumptionSeries,
    #[serde(default = "default_tips")]
    pub tips: Vec<EnergyTip>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub unread_notifications: u32,
}

fn default_title() -> String {
    "WisEnergy".into()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            unread_notifications: 0,
        }
    }
}

impl Config {
    /// Load YAML from disk, substitute $(VAR)/${VAR} with env vars, then parse and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let cfg = Self::from_yaml(&raw)?;
        tracing::debug!(
            path = %path.display(),
            appliances = cfg.appliances.len(),
            tips = cfg.tips.len(),
            "dashboard config loaded"
        );
        Ok(cfg)
    }

    /// Parse and validate a YAML document, expanding env placeholders first.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let expanded = expand_env_placeholders(raw)?;
        let cfg: Self = serde_yaml::from_str(&expanded)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.reading.validate()?;
        self.budget.validate()?;

        let mut seen = HashSet::new();
        for appliance in &self.appliances {
            appliance.validate()?;
            if !seen.insert(appliance.name.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate appliance name: {}",
                    appliance.name
                )));
            }
        }

        if self.tips.is_empty() {
            return Err(AppError::Config(
                "tips cannot be empty; omit the key to use the built-in catalog".to_string(),
            ));
        }

        Ok(())
    }
}

/// Expand $(VAR) and ${VAR} placeholders using environment variables.
/// "$$" becomes a literal "$"; any other '$' is kept as-is.
fn expand_env_placeholders(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut it = input.chars().peekable();

    while let Some(c) = it.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let close = match it.peek().copied() {
            Some('$') => {
                it.next();
                out.push('$');
                continue;
            }
            Some('(') => ')',
            Some('{') => '}',
            _ => {
                out.push('$');
                continue;
            }
        };
        it.next(); // consume the opening bracket
        let var = read_until(&mut it, close).ok_or_else(|| {
            AppError::Config(format!("unterminated env placeholder: missing '{}'", close))
        })?;
        let val = std::env::var(&var)
            .map_err(|_| AppError::Config(format!("missing environment variable: {}", var)))?;
        out.push_str(&val);
    }

    Ok(out)
}

/// Read characters until we hit `end`, returning the collected string.
fn read_until<I>(it: &mut std::iter::Peekable<I>, end: char) -> Option<String>
where
    I: Iterator<Item = char>,
{
    let mut buf = String::new();
    for ch in it.by_ref() {
        if ch == end {
            return Some(buf);
        }
        buf.push(ch);
    }
    None
}
