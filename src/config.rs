//! Site configuration: which homepages to harvest and where each CSV goes.
//!
//! The configuration surface is deliberately small - a list of
//! (URL, destination filename) pairs. It can come from a YAML file passed
//! via `--sites`, or fall back to the built-in defaults.
//!
//! # YAML Format
//!
//! ```yaml
//! - url: https://www.dawn.com/
//!   destination: dawn_data.csv
//! - url: https://www.bbc.com/
//!   destination: bbc_data.csv
//! ```

use serde::Deserialize;
use std::error::Error;
use tracing::info;

/// One homepage to harvest and the CSV filename its rows land in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SiteTarget {
    /// Homepage URL to fetch.
    pub url: String,
    /// Destination CSV filename, relative to the output directory.
    pub destination: String,
}

/// The built-in site list used when no `--sites` file is given.
pub fn default_sites() -> Vec<SiteTarget> {
    vec![
        SiteTarget {
            url: "https://www.dawn.com/".to_string(),
            destination: "dawn_data.csv".to_string(),
        },
        SiteTarget {
            url: "https://www.bbc.com/".to_string(),
            destination: "bbc_data.csv".to_string(),
        },
    ]
}

/// Load the site list from a YAML file.
pub fn load_sites(path: &str) -> Result<Vec<SiteTarget>, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let sites: Vec<SiteTarget> = serde_yaml::from_str(&raw)?;
    info!(path, count = sites.len(), "Loaded site list");
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_sites() {
        let sites = default_sites();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].url, "https://www.dawn.com/");
        assert_eq!(sites[0].destination, "dawn_data.csv");
        assert_eq!(sites[1].url, "https://www.bbc.com/");
        assert_eq!(sites[1].destination, "bbc_data.csv");
    }

    #[test]
    fn test_load_sites_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "- url: https://news.example/\n  destination: example.csv"
        )
        .unwrap();

        let sites = load_sites(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            sites,
            vec![SiteTarget {
                url: "https://news.example/".to_string(),
                destination: "example.csv".to_string(),
            }]
        );
    }

    #[test]
    fn test_load_sites_missing_file_errors() {
        assert!(load_sites("/definitely/not/here.yaml").is_err());
    }
}
