#[cfg(test)]
mod scanner_tests {
    use std::io::{self, Read};

    use sentence_parser::error::SentenceError;
    use sentence_parser::scanner::*;
    use sentence_parser::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let tokens: Vec<Token<'_>> = Scanner::new(source).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_word_classes() {
        assert_token_sequence(
            "the quick fox jumps her lazy dog",
            &[
                (TokenType::ARTICLE, "the"),
                (TokenType::ADJECTIVE, "quick"),
                (TokenType::NOUN, "fox"),
                (TokenType::VERB, "jumps"),
                (TokenType::POSSESSIVE, "her"),
                (TokenType::ADJECTIVE, "lazy"),
                (TokenType::NOUN, "dog"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_adverbs_and_whitespace() {
        assert_token_sequence(
            "  quickly\tsilently\r\n stops\n",
            &[
                (TokenType::ADVERB, "quickly"),
                (TokenType::ADVERB, "silently"),
                (TokenType::VERB, "stops"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_case_insensitive_keeps_lexeme() {
        assert_token_sequence(
            "The OLD Car",
            &[
                (TokenType::ARTICLE, "The"),
                (TokenType::ADJECTIVE, "OLD"),
                (TokenType::NOUN, "Car"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_04_empty_input_is_just_eof() {
        assert_token_sequence("", &[(TokenType::EOF, "")]);
        assert_token_sequence(" \n\t ", &[(TokenType::EOF, "")]);
    }

    #[test]
    fn test_unknown_words_and_chars_token_sequence() {
        let tokens: Vec<Token<'_>> = Scanner::new("the zebra, runs.é").collect();

        // 0: ARTICLE 'the'
        // 1: ERROR 'zebra'   (not in the lexicon)
        // 2: ERROR ','
        // 3: ERROR 'runs'
        // 4: ERROR '.'
        // 5: ERROR 'é'      (whole multi-byte char)
        // 6: EOF
        assert_eq!(tokens.len(), 7, "Expected 7 tokens, got {:?}", tokens);

        assert_eq!(tokens[0], Token::new(TokenType::ARTICLE, "the"));
        assert_eq!(tokens[1], Token::new(TokenType::ERROR, "zebra"));
        assert_eq!(tokens[2], Token::new(TokenType::ERROR, ","));
        assert_eq!(tokens[5], Token::new(TokenType::ERROR, "é"));
        assert!(tokens[6].is_eof());

        let error_count = tokens
            .iter()
            .filter(|t| t.token_type == TokenType::ERROR)
            .count();
        assert_eq!(error_count, 5, "Expected 5 error tokens");
    }

    #[test]
    fn test_apostrophe_stays_inside_word() {
        let tokens: Vec<Token<'_>> = Scanner::new("dog's 'fox").collect();

        assert_eq!(tokens[0], Token::new(TokenType::ERROR, "dog's"));
        assert_eq!(tokens[1], Token::new(TokenType::ERROR, "'"));
        assert_eq!(tokens[2], Token::new(TokenType::NOUN, "fox"));
    }

    #[test]
    fn test_scanner_is_fused_after_eof() {
        let mut scanner = Scanner::new("dog");

        assert_eq!(scanner.next(), Some(Token::new(TokenType::NOUN, "dog")));
        assert_eq!(scanner.next(), Some(Token::eof()));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenType::VERB, "jumps").to_string(), "VERB jumps");
        assert_eq!(Token::eof().to_string(), "EOF");
        assert_eq!(classify("Silently"), TokenType::ADVERB);
    }

    #[test]
    fn test_read_source_feeds_scanner() {
        let source = read_source("my old car stops".as_bytes()).unwrap();
        let kinds: Vec<TokenType> = Scanner::new(&source).map(|t| t.token_type).collect();

        assert_eq!(
            kinds,
            vec![
                TokenType::POSSESSIVE,
                TokenType::ADJECTIVE,
                TokenType::NOUN,
                TokenType::VERB,
                TokenType::EOF,
            ]
        );
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let result = read_source(&[b'd', b'o', b'g', 0xff, 0xfe][..]);

        assert!(
            matches!(result, Err(SentenceError::Utf8(_))),
            "Expected Utf8 error, got {:?}",
            result
        );
    }

    #[test]
    fn test_read_source_reports_io_failure() {
        struct BrokenPipe;

        impl Read for BrokenPipe {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }
        }

        let result = read_source(BrokenPipe);

        match result {
            Err(SentenceError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
