//! Recursive-descent parser for the grammar notation.
//!
//! Binding, tightest first:
//!
//! ```text
//! atom     = '(' expr ')' | terminal | name
//! unary    = atom ('+' | '*' | '?')*
//! sequence = unary unary*            (ends at '|', ';', ')' or EOF)
//! choice   = '|'? sequence ('|' sequence)*
//! rule     = name ':' choice ';'
//! ```
//!
//! Trivia after a node becomes that node's [`Trivia`]. Trivia that has
//! no node to attach to (after a `|`, or before the first alternative)
//! is "loose": its comments end up on the enclosing rule.

use mds_ir::{Ebnf, EbnfKind, Production, Rule, Span, Trivia};
use mds_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{GrammarSyntaxError, SyntaxErrorKind};
use crate::token::{Token, TokenKind};

/// Output of the top-level parse.
pub(crate) struct ParsedGrammar {
    /// Name from a `grammar <name>;` line, if one was present.
    pub(crate) header: Option<String>,
    pub(crate) productions: Vec<Production>,
}

/// A parsed node plus loose trivia collected below it.
struct Parsed {
    node: Ebnf,
    loose: Trivia,
}

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    pub(crate) fn parse_grammar(mut self) -> Result<ParsedGrammar, GrammarSyntaxError> {
        let mut header = None;
        let mut productions = Vec::new();
        while !self.cursor.is_at_end() {
            match self.cursor.current_kind() {
                TokenKind::Whitespace(_) => self.cursor.skip_whitespace(),
                TokenKind::Newline => {
                    self.cursor.advance();
                    productions.push(Production::Blank);
                }
                TokenKind::Comment(text) => {
                    self.cursor.advance();
                    productions.push(Production::Comment(text.clone()));
                    self.cursor.eat(&TokenKind::Newline);
                }
                TokenKind::Word(word)
                    if word == "grammar"
                        && !matches!(self.cursor.peek_past_blanks(), TokenKind::Colon) =>
                {
                    let name = self.parse_header();
                    if header.is_none() {
                        header = Some(name);
                    }
                }
                TokenKind::Word(name) => {
                    let name_span = self.cursor.current_span();
                    self.cursor.advance();
                    let rule = self.parse_rule(name.clone(), name_span)?;
                    debug!(rule = %rule.name, "parsed rule");
                    productions.push(Production::Rule(rule));
                }
                other => {
                    return Err(GrammarSyntaxError::new(
                        SyntaxErrorKind::ExpectedName {
                            found: other.to_string(),
                        },
                        self.cursor.current_span(),
                    ));
                }
            }
        }
        Ok(ParsedGrammar {
            header,
            productions,
        })
    }

    /// `grammar <name> ... ;` followed by an optional line end.
    fn parse_header(&mut self) -> String {
        self.cursor.advance();
        self.cursor.skip_whitespace();
        let name = match self.cursor.current_kind() {
            TokenKind::Word(name) => name.clone(),
            _ => String::new(),
        };
        while !self.cursor.is_at_end() && !self.cursor.check(&TokenKind::Semicolon) {
            self.cursor.advance();
        }
        self.cursor.eat(&TokenKind::Semicolon);
        self.cursor.skip_whitespace();
        self.cursor.eat(&TokenKind::Newline);
        name
    }

    /// Everything after the rule name up to and including its line end.
    fn parse_rule(&mut self, name: String, name_span: Span) -> Result<Rule, GrammarSyntaxError> {
        let mut starts_on_new_line = false;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Whitespace(_) => {}
                TokenKind::Newline => starts_on_new_line = true,
                _ => break,
            }
            self.cursor.advance();
        }
        if !self.cursor.eat(&TokenKind::Colon) {
            return Err(GrammarSyntaxError::new(
                SyntaxErrorKind::MissingColon {
                    name,
                    found: self.cursor.current_kind().to_string(),
                },
                self.cursor.current_span(),
            ));
        }

        let lead = self.gather_trivia();
        starts_on_new_line |= lead.newline;
        let mut loose = lead;

        let Parsed { mut node, loose: inner } = self.parse_expression()?;
        loose.absorb(inner);
        node.trivia.absorb(self.gather_trivia());

        match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
            }
            TokenKind::RParen => {
                return Err(GrammarSyntaxError::new(
                    SyntaxErrorKind::MismatchedParentheses,
                    self.cursor.current_span(),
                ));
            }
            _ => {}
        }

        self.cursor.skip_whitespace();
        while let TokenKind::Comment(text) = self.cursor.current_kind() {
            loose.absorb(Trivia {
                comment: text.clone(),
                ..Trivia::default()
            });
            self.cursor.advance();
            self.cursor.skip_whitespace();
        }
        self.cursor.eat(&TokenKind::Newline);

        Ok(Rule {
            name,
            name_span,
            body: node,
            comment: (!loose.comment.is_empty()).then_some(loose.comment),
            starts_on_new_line,
        })
    }

    /// Consume whitespace, comments and line ends.
    fn gather_trivia(&mut self) -> Trivia {
        let mut trivia = Trivia::default();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Comment(text) => trivia.comment.push_str(text),
                TokenKind::Newline => {
                    trivia.newline = true;
                    if !trivia.comment.is_empty() {
                        trivia.comment.push(' ');
                    }
                }
                TokenKind::Whitespace(ws) => trivia.whitespace.push_str(ws),
                _ => break,
            }
            self.cursor.advance();
        }
        let trimmed = trivia.comment.trim_end().len();
        trivia.comment.truncate(trimmed);
        trivia
    }

    /// Leading trivia (always loose) and a choice.
    fn parse_expression(&mut self) -> Result<Parsed, GrammarSyntaxError> {
        let mut loose = self.gather_trivia();
        loose.newline = false;
        let parsed = self.parse_choice()?;
        loose.absorb(parsed.loose);
        Ok(Parsed {
            node: parsed.node,
            loose,
        })
    }

    fn parse_choice(&mut self) -> Result<Parsed, GrammarSyntaxError> {
        let mut loose = Trivia::default();
        if self.cursor.eat(&TokenKind::Pipe) {
            loose.absorb(Trivia {
                newline: false,
                ..self.gather_trivia()
            });
        }
        let first = self.parse_sequence()?;
        loose.absorb(first.loose);
        let mut alternatives = vec![first.node];
        while self.cursor.eat(&TokenKind::Pipe) {
            let gap = self.gather_trivia();
            if let Some(last) = alternatives.last_mut() {
                last.trivia.newline |= gap.newline;
            }
            loose.absorb(Trivia {
                newline: false,
                ..gap
            });
            let next = self.parse_sequence()?;
            loose.absorb(next.loose);
            alternatives.push(next.node);
        }
        Ok(Parsed {
            node: Ebnf::choice(alternatives),
            loose,
        })
    }

    fn parse_sequence(&mut self) -> Result<Parsed, GrammarSyntaxError> {
        let first = self.parse_unary()?;
        let mut loose = first.loose;
        let mut elements = vec![first.node];
        while !matches!(
            self.cursor.current_kind(),
            TokenKind::Pipe | TokenKind::Semicolon | TokenKind::RParen | TokenKind::Eof
        ) {
            let next = self.parse_unary()?;
            loose.absorb(next.loose);
            elements.push(next.node);
        }
        Ok(Parsed {
            node: Ebnf::sequence(elements),
            loose,
        })
    }

    fn parse_unary(&mut self) -> Result<Parsed, GrammarSyntaxError> {
        let Parsed { mut node, loose } = self.parse_atom()?;
        loop {
            let wrap: fn(Box<Ebnf>) -> EbnfKind = match self.cursor.current_kind() {
                TokenKind::Plus => EbnfKind::OneOrMore,
                TokenKind::Star => EbnfKind::ZeroOrMore,
                TokenKind::Question => EbnfKind::ZeroOrOne,
                _ => break,
            };
            self.cursor.advance();
            node = Ebnf::new(wrap(Box::new(node)));
            node.trivia = self.gather_trivia();
        }
        Ok(Parsed { node, loose })
    }

    fn parse_atom(&mut self) -> Result<Parsed, GrammarSyntaxError> {
        let token = self.cursor.current();
        let mut node = match &token.kind {
            TokenKind::LParen => {
                self.cursor.advance();
                let Parsed { mut node, loose } =
                    ensure_sufficient_stack(|| self.parse_expression())?;
                if !self.cursor.eat(&TokenKind::RParen) {
                    return Err(GrammarSyntaxError::new(
                        SyntaxErrorKind::MismatchedParentheses,
                        token.span,
                    ));
                }
                node.trivia.absorb(self.gather_trivia());
                return Ok(Parsed { node, loose });
            }
            TokenKind::Quoted(text) => {
                self.cursor.advance();
                terminal(text, token.span)?
            }
            TokenKind::Word(name) => {
                self.cursor.advance();
                Ebnf::reference(name.clone())
            }
            other => {
                return Err(GrammarSyntaxError::new(
                    SyntaxErrorKind::ExpectedExpression {
                        found: other.to_string(),
                    },
                    token.span,
                ));
            }
        };
        node.trivia = self.gather_trivia();
        Ok(Parsed {
            node,
            loose: Trivia::default(),
        })
    }
}

/// `'<name>'` is an extended terminal, anything else a plain one.
fn terminal(text: &str, span: Span) -> Result<Ebnf, GrammarSyntaxError> {
    if let Some(inner) = text.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        if inner.is_empty() {
            return Err(GrammarSyntaxError::new(
                SyntaxErrorKind::EmptyExtendedTerminal,
                span,
            ));
        }
        if inner.contains('?') {
            return Err(GrammarSyntaxError::new(
                SyntaxErrorKind::QuestionInExtendedTerminal,
                span,
            ));
        }
        return Ok(Ebnf::extended_terminal(inner));
    }
    if text.contains('\'') && text.contains('"') {
        return Err(GrammarSyntaxError::new(SyntaxErrorKind::MixedQuotes, span));
    }
    Ok(Ebnf::terminal(text))
}
