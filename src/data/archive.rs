//! Draw-archive download and normalization.
//!
//! The public archive serves one flat text file per lottery, one draw per
//! line in the form `"5182. 12.06.2013 4,17,25,26,37,42"`. Fetching
//! normalizes each line into the positional comma-separated form the loader
//! consumes, so ingest has a single input contract.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use reqwest::blocking::Client;

use crate::domain::Lottery;
use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "https://www.mbnet.com.pl";

/// Archive file name for a lottery.
fn archive_file(lottery: Lottery) -> &'static str {
    match lottery {
        Lottery::Lotto => "dl.txt",
        Lottery::LottoPlus => "dl_plus.txt",
        Lottery::Eurojackpot => "dl_ejp.txt",
        Lottery::Minilotto => "dl_mini.txt",
        Lottery::Multi => "dl_multi.txt",
    }
}

pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    /// Build a client, honoring a `DRAW_ARCHIVE_URL` override from the
    /// environment / `.env` (useful for mirrors and tests).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("DRAW_ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ArchiveClient {
            client: Client::new(),
            base_url,
        }
    }

    /// Download the raw archive text for a lottery.
    pub fn fetch_raw(&self, lottery: Lottery) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, archive_file(lottery));

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::fetch(format!("Request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::fetch(format!(
                "Request to {url} failed with status {}.",
                resp.status()
            )));
        }

        resp.text()
            .map_err(|e| AppError::fetch(format!("Failed to read archive body: {e}")))
    }

    /// Fetch, normalize, and write a lottery archive as positional CSV.
    ///
    /// Returns the number of rows written.
    pub fn fetch_to_csv(&self, lottery: Lottery, dest: &Path) -> Result<usize, AppError> {
        let raw = self.fetch_raw(lottery)?;
        let lines = normalize_archive(&raw);
        if lines.is_empty() {
            return Err(AppError::fetch("Archive contained no draw rows."));
        }

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::io(format!("Failed to create '{}': {e}", parent.display()))
            })?;
        }
        let mut file = File::create(dest).map_err(|e| {
            AppError::io(format!("Failed to create '{}': {e}", dest.display()))
        })?;
        for line in &lines {
            writeln!(file, "{line}")
                .map_err(|e| AppError::io(format!("Failed to write raw CSV: {e}")))?;
        }

        Ok(lines.len())
    }
}

/// Normalize archive text into positional CSV lines.
///
/// Tokens are whitespace-separated; the leading draw index carries a
/// trailing dot that is stripped. Number groups are already comma-joined, so
/// joining all tokens with commas yields the positional row.
pub fn normalize_archive(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|token| token.trim_end_matches('.'))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_archive_rows() {
        let text = "1. 27.01.1957 8,12,31,39,43,45\n\n5182. 12.06.2013 4,17,25,26,37,42\n";
        let lines = normalize_archive(text);
        assert_eq!(
            lines,
            vec![
                "1,27.01.1957,8,12,31,39,43,45",
                "5182,12.06.2013,4,17,25,26,37,42",
            ]
        );
    }

    #[test]
    fn normalized_rows_load_through_ingest() {
        let text = "1. 01.01.2021 1,2,3,4,5\n2. 02.01.2021 38,39,40,41,42\n";
        let csv = normalize_archive(text).join("\n");
        let table =
            crate::io::ingest::read_raw_table(csv.as_bytes(), Lottery::Minilotto).unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn every_lottery_has_an_archive_file() {
        for lottery in Lottery::ALL {
            assert!(archive_file(lottery).ends_with(".txt"));
        }
    }
}
