//! A single nucleotide within a DNA sequence.

/// An error related to the parsing of a nucleotide.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A symbol outside of the `{A, C, T, G}` alphabet.
    InvalidNucleotide(char),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNucleotide(c) => {
                write!(f, "{c:?} is not a valid nucleotide (expected A, C, T, or G)")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A nucleotide.
///
/// Ambiguity codes (such as `N`) and lowercase (soft-masked) letters are not
/// representable. Sequences handed to this crate are expected to be clean and
/// uppercase.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Nucleotide {
    /// Adenine.
    A,
    /// Cytosine.
    C,
    /// Thymine.
    T,
    /// Guanine.
    G,
}

impl Nucleotide {
    /// Gets the Watson-Crick complement of the nucleotide.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Nucleotide;
    ///
    /// assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
    /// assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
    /// assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
    /// assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
    /// ```
    pub fn complement(self) -> Nucleotide {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
        }
    }

    /// Gets the uppercase ASCII letter for the nucleotide.
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'T' => Ok(Nucleotide::T),
            'G' => Ok(Nucleotide::G),
            c => Err(ParseError::InvalidNucleotide(c)),
        }
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Nucleotide::try_from(char::from(value))
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
