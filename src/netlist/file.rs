#[derive(Debug)]
pub struct File {
    pub name: String,
    pub contents: String,
}

/// A 1-based line within a [`File`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: usize,
}

impl File {
    #[cfg(test)]
    pub(crate) fn test_file(contents: &str) -> File {
        File { name: "<test file>".into(), contents: contents.into() }
    }

    pub fn load(name: &str) -> Result<File, std::io::Error> {
        Ok(File { name: name.to_string(), contents: std::fs::read_to_string(name)? })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Location, &str)> + '_ {
        self.contents.lines().enumerate().map(|(i, line)| (Location { file: self.name.clone(), line: i + 1 }, line))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
