use std::io::BufRead as _;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("opening dictionary {path:?}")]
    Open {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("reading line {line} of dictionary {path:?}")]
    Read {
        path: std::path::PathBuf,
        line: usize,
        source: std::io::Error,
    },

    #[error("dictionary {path:?} holds more than {capacity} words")]
    TooManyWords {
        path: std::path::PathBuf,
        capacity: usize,
    },
}

pub fn load(
    path: impl AsRef<std::path::Path>,
    capacity: Option<usize>,
) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = vec![];
    for (i, line) in std::io::BufReader::new(file).lines().enumerate() {
        let word = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;

        if let Some(capacity) = capacity.filter(|&capacity| words.len() >= capacity) {
            return Err(Error::TooManyWords {
                path: path.to_path_buf(),
                capacity,
            });
        }

        words.push(word);
    }

    log::info!(path = path.display().to_string().as_str(), words = words.len(); "dictionary loaded");

    Ok(words)
}
