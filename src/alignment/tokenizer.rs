//*** START FILE: src/alignment/tokenizer.rs ***//

/// A run of text produced by `tokenize`. Separator runs keep their exact
/// characters, so a token sequence always glues back together into the
/// original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Separator { text: String, contains_newline: bool },
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Word(word) => word,
            Token::Separator { text, .. } => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Splits text into alternating word and separator runs. Whitespace is never
/// discarded; a separator that spans a paragraph break is flagged so callers
/// can render it as a line break instead of a plain gap.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut run = String::new();
    let mut run_is_separator: Option<bool> = None;

    for ch in text.chars() {
        let ch_is_separator = ch.is_whitespace();
        match run_is_separator {
            Some(current) if current == ch_is_separator => run.push(ch),
            Some(current) => {
                tokens.push(finish_run(run, current));
                run = String::new();
                run.push(ch);
                run_is_separator = Some(ch_is_separator);
            }
            None => {
                run.push(ch);
                run_is_separator = Some(ch_is_separator);
            }
        }
    }
    if let Some(current) = run_is_separator {
        tokens.push(finish_run(run, current));
    }
    tokens
}

fn finish_run(run: String, is_separator: bool) -> Token {
    if is_separator {
        let contains_newline = run.contains('\n');
        Token::Separator { text: run, contains_newline }
    } else {
        Token::Word(run)
    }
}

pub fn concat_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text()).collect()
}

pub fn word_count(text: &str) -> usize {
    tokenize(text).iter().filter(|token| token.is_word()).count()
}

/// The word sequence an editor clicks between. Same tokenization as
/// `split_at_word`, so the Nth rendered inter-word gap is always the Nth
/// computed split point.
pub fn word_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter_map(|token| match token {
            Token::Word(word) => Some(word),
            Token::Separator { .. } => None,
        })
        .collect()
}

//*** END FILE: src/alignment/tokenizer.rs ***//
