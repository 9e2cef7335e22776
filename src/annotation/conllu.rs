//! CoNLL-U reader.
//!
//! Only the LEMMA and UPOS columns are used. Multi-word token ranges and
//! empty nodes are skipped so the result lists syntactic words only.

use crate::error::AnnotationError;
use crate::types::{AnnotatedSentence, Annotation, UposTag};

const FIELD_COUNT: usize = 10;

/// Parse a CoNLL-U document into sentences.
pub fn parse(input: &str) -> Result<Vec<AnnotatedSentence>, AnnotationError> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(AnnotatedSentence::new(std::mem::take(&mut current)));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(AnnotationError::Malformed {
                line: line_number,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        let id = fields[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }
        if id.parse::<usize>().is_err() {
            return Err(AnnotationError::Malformed {
                line: line_number,
                reason: format!("invalid word id {:?}", id),
            });
        }

        let lemma = match fields[2] {
            "" | "_" => None,
            lemma => Some(lemma.to_string()),
        };
        current.push(Annotation {
            lemma,
            upos: UposTag::from(fields[3]),
        });
    }

    if !current.is_empty() {
        sentences.push(AnnotatedSentence::new(current));
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
# sent_id = 1
# text = Gallia est omnis divisa
1\tGallia\tGallia\tPROPN\t_\t_\t4\tnsubj\t_\t_
2\test\tsum\tAUX\t_\t_\t4\tcop\t_\t_
3\tomnis\tomnis\tDET\t_\t_\t1\tdet\t_\t_
4\tdivisa\tdivido\tVERB\t_\t_\t0\troot\t_\tSpaceAfter=No

# sent_id = 2
1-2\tneque\t_\t_\t_\t_\t_\t_\t_\t_
1\tne\tne\tCCONJ\t_\t_\t0\troot\t_\t_
2\tque\tque\tCCONJ\t_\t_\t1\tfixed\t_\t_
2.1\tx\t_\t_\t_\t_\t_\t_\t_\t_
3\t,\t_\tPUNCT\t_\t_\t1\tpunct\t_\t_
";

    #[test]
    fn test_parse_sentences_and_words() {
        let sentences = parse(SAMPLE).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(
            sentences[0].words,
            vec![
                Annotation::new("Gallia", UposTag::Propn),
                Annotation::new("sum", UposTag::Aux),
                Annotation::new("omnis", UposTag::Det),
                Annotation::new("divido", UposTag::Verb),
            ]
        );
        assert_eq!(
            sentences[1].words,
            vec![
                Annotation::new("ne", UposTag::Cconj),
                Annotation::new("que", UposTag::Cconj),
                Annotation::without_lemma(UposTag::Punct),
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n# only comments\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_missing_trailing_blank_line() {
        let sentences = parse("1\tbellum\tbellum\tNOUN\t_\t_\t0\troot\t_\t_").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words[0], Annotation::new("bellum", UposTag::Noun));
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let err = parse("# c\n1\tbellum\tbellum\tNOUN\n").unwrap_err();
        match err {
            AnnotationError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_id_is_malformed() {
        let err = parse("a\tbellum\tbellum\tNOUN\t_\t_\t0\troot\t_\t_\n").unwrap_err();
        assert!(matches!(err, AnnotationError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "1\tbellum\tbellum\tNOUN\t_\t_\t0\troot\t_\t_\r\n\r\n";
        let sentences = parse(input).unwrap();
        assert_eq!(sentences[0].words[0].upos, UposTag::Noun);
    }
}
