use std::collections::HashMap;

use serde::Serialize;

use crate::error::DuplicateSwitchError;

/// What kind of value a switch takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Help,
    Bool,
    Int,
    String,
    StringList,
    IntList,
    FilePath,
    DirPath,
}

impl Arity {
    /// Short description of the expected argument, used in diagnostics.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Help | Self::Bool => "no argument",
            Self::Int => "an integer",
            Self::String => "a string",
            Self::StringList => "a comma-separated list of strings",
            Self::IntList => "a comma-separated list of integers",
            Self::FilePath => "a file path",
            Self::DirPath => "a directory path",
        }
    }
}

/// Subsystem of the downloader that owns a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Service {
    Basic,
    Kemono,
}

/// Stable identifier of a configuration slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Config {
    DownloadFolder,
    Verbose,
    ThreadCount,
    DownloadChunkSz,
    BulkFile,
    Unzip,
    HttpCodes,
    HttpsRetries,
    Help,
    KemonoFilenameTemplate,
    KemonoExcludeFile,
    KemonoExcludePost,
    KemonoExcludeLink,
    KemonoFolderStructure,
}

impl Config {
    pub fn entry(self) -> &'static ConfigEntry {
        // ENTRIES is laid out in variant order.
        &ENTRIES[self as usize]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    pub config: Config,
    pub switches: &'static [&'static str],
    pub arity: Arity,
    pub service: Service,
    pub description: &'static str,
}

pub type SwitchTable = HashMap<&'static str, &'static ConfigEntry>;

static ENTRIES: &[ConfigEntry] = &[
    ConfigEntry {
        config: Config::DownloadFolder,
        switches: &["-d", "--download_folder"],
        arity: Arity::DirPath,
        service: Service::Basic,
        description: "Folder to download files into",
    },
    ConfigEntry {
        config: Config::Verbose,
        switches: &["-v", "--verbose"],
        arity: Arity::Int,
        service: Service::Basic,
        description: "Verbosity level, 0 (quiet) to 3 (everything)",
    },
    ConfigEntry {
        config: Config::ThreadCount,
        switches: &["-t", "--threads"],
        arity: Arity::Int,
        service: Service::Basic,
        description: "Number of download threads, default 6",
    },
    ConfigEntry {
        config: Config::DownloadChunkSz,
        switches: &["-c", "--chunk_sz"],
        arity: Arity::Int,
        service: Service::Basic,
        description: "Download chunk size in bytes",
    },
    ConfigEntry {
        config: Config::BulkFile,
        switches: &["-f", "--bulk"],
        arity: Arity::FilePath,
        service: Service::Basic,
        description: "File or URL to read links from for a bulk download",
    },
    ConfigEntry {
        config: Config::Unzip,
        switches: &["-u", "--unzip"],
        arity: Arity::Bool,
        service: Service::Basic,
        description: "Unzip downloaded archives automatically",
    },
    ConfigEntry {
        config: Config::HttpCodes,
        switches: &["-z", "--http_codes"],
        arity: Arity::IntList,
        service: Service::Basic,
        description: "Comma-separated HTTP codes to retry on, e.g. 429,500,502",
    },
    ConfigEntry {
        config: Config::HttpsRetries,
        switches: &["-r", "--http_retries"],
        arity: Arity::Int,
        service: Service::Basic,
        description: "Maximum number of retries for a failed request",
    },
    ConfigEntry {
        config: Config::Help,
        switches: &["-h", "--help"],
        arity: Arity::Help,
        service: Service::Basic,
        description: "Print this help and exit",
    },
    ConfigEntry {
        config: Config::KemonoFilenameTemplate,
        switches: &["--kxftype"],
        arity: Arity::String,
        service: Service::Kemono,
        description: "Custom filename template for Kemono downloads",
    },
    ConfigEntry {
        config: Config::KemonoExcludeFile,
        switches: &["--kxfile"],
        arity: Arity::StringList,
        service: Service::Kemono,
        description: "Comma-separated file extensions to skip, e.g. png,gif",
    },
    ConfigEntry {
        config: Config::KemonoExcludePost,
        switches: &["--kxpost"],
        arity: Arity::StringList,
        service: Service::Kemono,
        description: "Skip posts whose title contains any of these keywords",
    },
    ConfigEntry {
        config: Config::KemonoExcludeLink,
        switches: &["--kxlink"],
        arity: Arity::StringList,
        service: Service::Kemono,
        description: "Skip links that contain any of these keywords",
    },
    ConfigEntry {
        config: Config::KemonoFolderStructure,
        switches: &["--kfstructure"],
        arity: Arity::Int,
        service: Service::Kemono,
        description: "Output folder structure: 0 flat, 1 per post, 2 per post with attachments",
    },
];

/// All supported switches in registry order.
pub fn list_all_entries() -> &'static [ConfigEntry] {
    ENTRIES
}

/// Entries owned by `service`, in registry order.
pub fn entries_for(service: Service) -> impl Iterator<Item = &'static ConfigEntry> {
    ENTRIES.iter().filter(move |e| e.service == service)
}

/// Map every switch spelling to its entry.
pub fn build_switch_table() -> Result<SwitchTable, DuplicateSwitchError> {
    let mut table = SwitchTable::with_capacity(ENTRIES.len() * 2);

    for entry in ENTRIES {
        for &switch in entry.switches {
            if let Some(existing) = table.insert(switch, entry) {
                return Err(DuplicateSwitchError {
                    switch,
                    first: existing.config,
                    second: entry.config,
                });
            }
        }
    }

    Ok(table)
}

/// Usage text, one line per entry.
pub fn render_help() -> String {
    let lines: Vec<(String, &str)> = ENTRIES
        .iter()
        .map(|e| (e.switches.join(", "), e.description))
        .collect();
    let width = lines.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    lines
        .iter()
        .map(|(switches, description)| format!("{switches:<width$}  {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_table_builds_without_duplicates() {
        let table = build_switch_table().unwrap();
        let spellings: usize = ENTRIES.iter().map(|e| e.switches.len()).sum();
        assert_eq!(table.len(), spellings);
        assert_eq!(table["--threads"].config, Config::ThreadCount);
        assert_eq!(table["-t"].config, Config::ThreadCount);
    }

    #[test]
    fn entries_are_in_config_order() {
        for (i, entry) in ENTRIES.iter().enumerate() {
            assert!(!entry.switches.is_empty(), "{:?}", entry.config);
            assert_eq!(entry.config as usize, i, "{:?} out of place", entry.config);
            assert_eq!(entry.config.entry(), entry);
        }
        assert_eq!(Config::KemonoFolderStructure as usize, ENTRIES.len() - 1);
    }

    #[test]
    fn help_has_one_line_per_entry_in_order() {
        let help = render_help();
        let lines: Vec<&str> = help.lines().collect();
        assert_eq!(lines.len(), ENTRIES.len());
        assert!(lines[0].starts_with("-d, --download_folder"));
        assert!(lines[0].ends_with("Folder to download files into"));
        assert!(lines.last().unwrap().starts_with("--kfstructure"));
    }

    #[test]
    fn kemono_entries() {
        let kemono: Vec<Config> = entries_for(Service::Kemono).map(|e| e.config).collect();
        assert_eq!(
            kemono,
            [
                Config::KemonoFilenameTemplate,
                Config::KemonoExcludeFile,
                Config::KemonoExcludePost,
                Config::KemonoExcludeLink,
                Config::KemonoFolderStructure,
            ]
        );
    }
}
