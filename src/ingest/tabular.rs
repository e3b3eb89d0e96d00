use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::constants::error_messages;
use crate::core::error::{Result, UrlProbeError};

/// Read URLs from CSV: the header row is skipped and the first column of
/// every other row is taken as a URL. Blank cells and blank rows are dropped.
pub fn read_csv_urls<R: Read>(input: R) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    if reader.headers()?.is_empty() {
        return Err(UrlProbeError::Input(error_messages::EMPTY_CSV.to_string()));
    }

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(0)
            && !url.is_empty()
        {
            urls.push(url.to_string());
        }
    }

    Ok(urls)
}

/// Same as [`read_csv_urls`], reading from a file.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| file_error(path, &e))?;

    read_csv_urls(file).map_err(|e| match e {
        UrlProbeError::Input(_) => e,
        other => file_error(path, &other),
    })
}

fn file_error(path: &Path, err: &dyn std::error::Error) -> UrlProbeError {
    UrlProbeError::Input(format!("Error reading file '{}': {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_skips_header_and_takes_first_column() -> Result<()> {
        let input = "Website,Owner\nhttps://a.example,alice\nhttps://b.example,bob\n";

        let urls = read_csv_urls(input.as_bytes())?;

        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
        Ok(())
    }

    #[test]
    fn test_single_column_without_trailing_newline() -> Result<()> {
        let urls = read_csv_urls("url\nhttps://a.example".as_bytes())?;

        assert_eq!(urls, vec!["https://a.example"]);
        Ok(())
    }

    #[test]
    fn test_drops_blank_cells_and_trims() -> Result<()> {
        let input = "url,note\n  https://a.example  ,x\n,only-note\n\nhttps://b.example\n";

        let urls = read_csv_urls(input.as_bytes())?;

        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
        Ok(())
    }

    #[test]
    fn test_keeps_quoted_urls_with_commas() -> Result<()> {
        let input = "url\n\"https://a.example/?q=1,2\"\n";

        let urls = read_csv_urls(input.as_bytes())?;

        assert_eq!(urls, vec!["https://a.example/?q=1,2"]);
        Ok(())
    }

    #[test]
    fn test_header_only_yields_no_urls() -> Result<()> {
        let urls = read_csv_urls("url\n".as_bytes())?;

        assert!(urls.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = read_csv_urls("".as_bytes()).unwrap_err();

        assert!(matches!(err, UrlProbeError::Input(_)));
        assert_eq!(err.to_string(), "Input error: CSV file is empty.");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let input: &[u8] = b"url\nhttps://a.example/\xff\xfe\n";

        assert!(matches!(
            read_csv_urls(input).unwrap_err(),
            UrlProbeError::Csv(_)
        ));
    }

    #[test]
    fn test_read_csv_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"URL\nhttps://a.example\nnot a url\n")?;

        let urls = read_csv_file(file.path())?;

        assert_eq!(urls, vec!["https://a.example", "not a url"]);
        Ok(())
    }

    #[test]
    fn test_read_csv_file_missing() {
        let err = read_csv_file("no-such-input.csv").unwrap_err();

        assert!(matches!(err, UrlProbeError::Input(_)));
        assert!(err.to_string().contains("Error reading file 'no-such-input.csv'"));
    }

    #[test]
    fn test_read_csv_file_empty_keeps_message() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;

        let err = read_csv_file(file.path()).unwrap_err();

        assert_eq!(err.to_string(), "Input error: CSV file is empty.");
        Ok(())
    }
}
