//! Repeat motifs and their equivalence classes.
//!
//! Two repeat units are considered to describe the "same" repeat if one can be
//! turned into the other by cyclically rotating it and/or by taking the
//! reverse complement (i.e., reading the other strand). For example, the
//! tracks `(AAG)n`, `(AGA)n`, and `(CTT)n` are all the same repeat.
//!
//! ```text
//! motif:                AAG
//! rotations:            GAA  AGA  AAG
//! reverse complements:  TTC  TCT  CTT
//! ```

use std::str::FromStr;

use nonempty::NonEmpty;

use crate::nucleotide;
use crate::Nucleotide;

/// An error related to a [`Motif`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The motif was empty.
    Empty,

    /// The motif contained a symbol outside of the `{A, C, T, G}` alphabet.
    InvalidMotif(String, nucleotide::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Empty => write!(f, "invalid motif: motif cannot be empty"),
            Error::InvalidMotif(motif, err) => write!(f, "invalid motif \"{motif}\": {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A repeat motif.
///
/// A motif is guaranteed to be non-empty and to only contain valid
/// [`Nucleotide`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Motif(NonEmpty<Nucleotide>);

impl Motif {
    /// Gets the number of nucleotides in the motif.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Motif;
    ///
    /// let motif = "AAG".parse::<Motif>()?;
    /// assert_eq!(motif.len(), 3);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gets the nucleotides of the motif.
    pub fn nucleotides(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }

    /// Gets every cyclic rotation of the motif.
    ///
    /// The `k`th rotation (counting from one) begins reading the motif at
    /// index `(len - k) mod len`, so the final rotation is always the motif
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Motif;
    ///
    /// let motif = "AAG".parse::<Motif>()?;
    /// let rotations = motif
    ///     .rotations()
    ///     .iter()
    ///     .map(|rotation| rotation.iter().map(|n| n.as_char()).collect::<String>())
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(rotations, vec!["GAA", "AGA", "AAG"]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn rotations(&self) -> Vec<Vec<Nucleotide>> {
        let bases = self.nucleotides().collect::<Vec<_>>();
        let len = bases.len();

        (1..=len)
            .map(|k| {
                let offset = (len - k) % len;
                bases[offset..]
                    .iter()
                    .chain(bases[..offset].iter())
                    .copied()
                    .collect()
            })
            .collect()
    }

    /// Generates the full [`EquivalenceClass`] for the motif.
    ///
    /// The class contains exactly `2 * len` members: the rotations of the
    /// motif followed by the reverse complement of each rotation (in the same
    /// order). Members are not deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatspec::Motif;
    ///
    /// let motif = "AAG".parse::<Motif>()?;
    /// let class = motif.equivalents();
    ///
    /// assert_eq!(
    ///     class.iter().collect::<Vec<_>>(),
    ///     vec!["GAA", "AGA", "AAG", "TTC", "TCT", "CTT"]
    /// );
    /// assert!(class.contains("CTT"));
    /// assert!(!class.contains("GGA"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn equivalents(&self) -> EquivalenceClass {
        let rotations = self.rotations();

        let reverse_complements = rotations
            .iter()
            .map(|rotation| {
                rotation
                    .iter()
                    .rev()
                    .map(|n| n.complement())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let members = rotations
            .iter()
            .chain(reverse_complements.iter())
            .map(|bases| bases.iter().map(|n| n.as_char()).collect::<String>())
            .collect();

        EquivalenceClass(members)
    }
}

impl FromStr for Motif {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bases = s
            .chars()
            .map(Nucleotide::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::InvalidMotif(s.to_string(), err))?;

        NonEmpty::from_vec(bases).map(Motif).ok_or(Error::Empty)
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for nucleotide in self.0.iter() {
            write!(f, "{nucleotide}")?;
        }

        Ok(())
    }
}

/// The set of repeat units considered equivalent to a [`Motif`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EquivalenceClass(Vec<String>);

impl EquivalenceClass {
    /// Returns whether `unit` is a member of the class.
    pub fn contains(&self, unit: &str) -> bool {
        self.0.iter().any(|member| member == unit)
    }

    /// Iterates over the members of the class in the order they were
    /// generated.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Gets the number of members in the class (including duplicates).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the class has no members.
    ///
    /// This can never be true for a class generated from a [`Motif`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn reverse_complement(s: &str) -> String {
        s.chars()
            .rev()
            .map(|c| Nucleotide::try_from(c).unwrap().complement().as_char())
            .collect()
    }

    #[test]
    fn test_motif_from_str() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "CAG".parse::<Motif>()?;
        assert_eq!(motif.len(), 3);
        assert_eq!(motif.to_string(), "CAG");

        let err = "".parse::<Motif>().unwrap_err();
        assert_eq!(err, Error::Empty);

        let err = "AXG".parse::<Motif>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid motif \"AXG\": 'X' is not a valid nucleotide (expected A, C, T, or G)"
        );

        Ok(())
    }

    #[test]
    fn test_equivalents_of_aag() -> Result<(), Box<dyn std::error::Error>> {
        let class = "AAG".parse::<Motif>()?.equivalents();
        let members = class.iter().collect::<HashSet<_>>();

        for expected in ["AAG", "AGA", "GAA", "TTC", "TCT", "CTT"] {
            assert!(members.contains(expected), "missing {expected}");
        }

        Ok(())
    }

    #[test]
    fn test_equivalents_size_and_lengths() -> Result<(), Box<dyn std::error::Error>> {
        for s in ["A", "AT", "CAG", "AAAG", "GGCCCC", "ATTCT"] {
            let motif = s.parse::<Motif>()?;
            let class = motif.equivalents();

            assert_eq!(class.len(), 2 * s.len());
            assert!(class.iter().all(|member| member.len() == s.len()));
            assert!(class.contains(s));
        }

        Ok(())
    }

    #[test]
    fn test_equivalents_are_not_deduplicated() -> Result<(), Box<dyn std::error::Error>> {
        // `AT` is its own reverse complement and `TA` is too.
        let class = "AT".parse::<Motif>()?.equivalents();
        assert_eq!(class.iter().collect::<Vec<_>>(), vec!["TA", "AT", "TA", "AT"]);

        let class = "A".parse::<Motif>()?.equivalents();
        assert_eq!(class.iter().collect::<Vec<_>>(), vec!["A", "T"]);

        Ok(())
    }

    #[test]
    fn test_reverse_complement_closure() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "AAGCT".parse::<Motif>()?;
        let class = motif.equivalents().iter().map(String::from).collect::<Vec<_>>();
        let (forward, reverse) = class.split_at(motif.len());

        for member in reverse {
            let back = reverse_complement(member);
            assert!(forward.contains(&back));

            // Any rotation of a recovered member is also a forward member.
            let rotated = format!("{}{}", &back[1..], &back[..1]);
            assert!(forward.contains(&rotated));
        }

        Ok(())
    }

    #[test]
    fn test_equivalents_are_pure() -> Result<(), Box<dyn std::error::Error>> {
        let motif = "CCG".parse::<Motif>()?;
        assert_eq!(motif.equivalents(), motif.equivalents());
        Ok(())
    }
}
