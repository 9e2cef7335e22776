//! Raw corpus normalization.
//!
//! Strips editorial sigla, non-word punctuation and digits, then collapses
//! whitespace. Rules run in a fixed order; each one narrows what the next
//! one sees.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Marginal reference sigla such as `A.` or `DX.` glued to the next word.
    static ref SIGLA: Regex = Regex::new(r"\b[ADFIKLMNOPRUVX]+\.\b").unwrap();
    /// Anything that is not a word character, whitespace or a macron vowel / diphthong.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\sāēīōūæœ]").unwrap();
    static ref DIGITS: Regex = Regex::new(r"\d+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Normalize raw corpus text before annotation.
///
/// Never fails; the empty string normalizes to itself. Applying it twice
/// yields the same result as applying it once.
pub fn normalize(text: &str) -> String {
    let text = SIGLA.replace_all(text, "");
    // Replace rather than delete so neighbouring words never fuse.
    let text = NON_WORD.replace_all(&text, " ");
    let text = DIGITS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(
            normalize("Gallia est omnis divisa in partes tres, quarum unam incolunt Belgae;"),
            "Gallia est omnis divisa in partes tres quarum unam incolunt Belgae"
        );
        assert_eq!(normalize("arma,virumque"), "arma virumque");
    }

    #[test]
    fn test_digits_removed() {
        assert_eq!(normalize("[1] Gallia est 23 omnis"), "Gallia est omnis");
        assert_eq!(normalize("LIBER 2"), "LIBER");
    }

    #[test]
    fn test_sigla_removed_when_attached_to_word() {
        assert_eq!(normalize("M.Messala consule"), "Messala consule");
        assert_eq!(normalize("DX.Pisone"), "Pisone");
    }

    #[test]
    fn test_sigla_require_whole_word() {
        // Lower-case or foreign letters are not sigla; the period is still punctuation.
        assert_eq!(normalize("aM.Messala"), "aM Messala");
        assert_eq!(normalize("B.Messala"), "B Messala");
    }

    #[test]
    fn test_macrons_and_diphthongs_survive() {
        assert_eq!(normalize("Rōma — cæsar; pœna!"), "Rōma cæsar pœna");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("  Caesar \n\n  venit\t\tvidit  "), "Caesar venit vidit");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Gallia est omnis divisa in partes tres.",
            "M.Messala et M.Pisone consulibus, 58 a.C.",
            "  (1) Rōmānī — æternī; pœnæ?  \n\n",
            "x.y.z 1.2.3 ..., ;;; _under_score_",
            "A.B. C. D.E.F",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
