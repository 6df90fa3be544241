use std::{
    fs::{self, File},
    io::{self, BufWriter, Read as _, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use tally_stats::Dataset;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    pub fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(&mut *self, "{text}")
            .with_context(|| format!("Failed to write to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Reads samples from `path`, or from stdin when no path is given.
pub fn read_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    let (text, source) = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            (text, path.display().to_string())
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read samples from stdin")?;
            (text, "stdin".to_string())
        }
    };

    let samples = parse_samples(&text).with_context(|| format!("Invalid input in {source}"))?;
    tracing::info!(count = samples.len(), %source, "loaded samples");
    Ok(Dataset::from_values(samples))
}

/// Parses numbers separated by whitespace and/or commas.
pub fn parse_samples(text: &str) -> anyhow::Result<Vec<f64>> {
    let mut samples = vec![];
    let tokens = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());
    for (i, token) in tokens.enumerate() {
        let Ok(value) = token.parse::<f64>() else {
            bail!("invalid number '{token}' at position {}", i + 1);
        };
        samples.push(value);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let samples = parse_samples("5, 7.7 2.8\n-3\t12.5,,3.8\n").unwrap();
        assert_eq!(samples, vec![5.0, 7.7, 2.8, -3.0, 12.5, 3.8]);
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_samples("").unwrap().is_empty());
        assert!(parse_samples(" \n , \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_position() {
        let err = parse_samples("1 2 abc 4").unwrap_err();
        assert_eq!(err.to_string(), "invalid number 'abc' at position 3");
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!(parse_samples("1e3 -2.5E-1").unwrap(), vec![1000.0, -0.25]);
    }
}
