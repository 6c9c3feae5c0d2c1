use crate::file::FileRef;

/// Verdict on whether a file is one part of a multi-disc set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiDiscVerdict {
    pub is_multi_disc: bool,
    /// File name the whole set is catalogued under (e.g. `"Best Game.bin"`).
    pub set_name: String,
    /// Name recorded for this disc in the representative's disk list.
    pub disc_name: String,
    /// Extension of the disc file, with leading dot.
    pub extension: String,
    /// Position of the disc within the set, as reported by the parser.
    pub order: u32,
}

impl MultiDiscVerdict {
    /// Verdict for a file that is not part of a set.
    pub fn single() -> Self {
        Self::default()
    }

    pub fn disc(
        set_name: impl Into<String>,
        disc_name: impl Into<String>,
        extension: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            is_multi_disc: true,
            set_name: set_name.into(),
            disc_name: disc_name.into(),
            extension: extension.into(),
            order,
        }
    }
}

/// Strategy that recognizes multi-disc file names.
///
/// The scanner never inspects names itself; it asks the injected parser
/// for a verdict per file and acts on it.
pub trait MultiDiscParser {
    fn parse(&self, file: &FileRef) -> MultiDiscVerdict;
}

impl<F> MultiDiscParser for F
where
    F: Fn(&FileRef) -> MultiDiscVerdict,
{
    fn parse(&self, file: &FileRef) -> MultiDiscVerdict {
        self(file)
    }
}
