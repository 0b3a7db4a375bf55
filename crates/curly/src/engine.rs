//! The rune-driven formatting state machine.
//!
//! One `Scanner` drives a single call: it feeds the pattern rune-by-rune
//! through a finite-state scan, copying literal text, unescaping `{{`/`}}`,
//! and, on each completed placeholder, resolving the parameter, rendering
//! it per the collected [`FieldSpec`] before resetting the scratch state.
//!
//! The scan must end in `Plain`; ending in any other state means an
//! unterminated placeholder or a dangling escape and fails the call.

use curly_scan::{is_identifier_start, Tokenizer};

use crate::error::{FormatError, FormatResult};
use crate::params::ParamSource;
use crate::render::render;
use crate::spec::{Align, FieldSpec, Verb};
use crate::value::Value;

/// Parameter binding for one formatting call.
///
/// Fixed for the whole call: a pattern is either indexed (bare `{}` /
/// explicit `{N}`) or named (`{identifier}`), never both.
pub(crate) enum Binding<'a> {
    /// `{}` / `{N}` placeholders resolved against a value slice.
    Indexed(&'a [Value]),
    /// `{name}` placeholders resolved through a source.
    Named(&'a dyn ParamSource),
}

/// Scan states. `Plain` is the initial and only accepting state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Copying literal runes.
    Plain,
    /// Consumed `{`; deciding between escape, reference, and spec.
    OpenBrace,
    /// Consumed `}`; only the `}}` escape is legal.
    CloseBrace,
    /// Reading an explicit index or a name.
    Reference,
    /// At the head of a format spec, detecting a padding clause.
    Spec,
    /// Reading the alignment marker and width.
    Padding,
    /// Reading the optional `.digits` fraction clause.
    Fraction,
    /// Reading the optional `#` flag and verb rune.
    Verb,
    /// Expecting the closing `}`.
    End,
}

/// The placeholder currently being resolved.
enum Target {
    Index(usize),
    Name(String),
}

/// Run one formatting call, appending rendered output to `out`.
pub(crate) fn run(out: &mut String, pattern: &str, binding: Binding<'_>) -> FormatResult<()> {
    Scanner {
        t: Tokenizer::new(pattern),
        binding,
        out,
        auto_count: 0,
        used_auto: false,
        used_manual: false,
        target: Target::Index(0),
        spec: FieldSpec::DEFAULT,
    }
    .scan()
}

struct Scanner<'a> {
    t: Tokenizer,
    binding: Binding<'a>,
    out: &'a mut String,
    /// Next automatic index; bumped once per bare `{}` (or `{:spec}`).
    auto_count: usize,
    /// Automatic numbering seen anywhere in this pattern.
    used_auto: bool,
    /// Manual `{N}` indexing seen anywhere in this pattern.
    used_manual: bool,
    target: Target,
    spec: FieldSpec,
}

impl Scanner<'_> {
    fn scan(&mut self) -> FormatResult<()> {
        let mut state = State::Plain;
        while self.t.has_next() {
            let c = self.t.next_rune();
            state = match state {
                State::Plain => self.plain(c),
                State::OpenBrace => self.open_brace(c)?,
                State::CloseBrace => self.close_brace(c)?,
                State::Reference => self.reference(c)?,
                State::Spec => self.spec_head(c),
                State::Padding => self.padding(c)?,
                State::Fraction => self.fraction(c),
                State::Verb => self.verb(c)?,
                State::End => self.end(c)?,
            };
        }
        if state == State::Plain {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    fn malformed(&self) -> FormatError {
        FormatError::MalformedPattern {
            position: self.t.index(),
        }
    }

    fn plain(&mut self, c: char) -> State {
        match c {
            '{' => State::OpenBrace,
            '}' => State::CloseBrace,
            _ => {
                self.out.push(c);
                State::Plain
            }
        }
    }

    /// Just consumed `{`. `{{` escapes; otherwise the rune opens a
    /// reference or (indexed mode only) a bare/spec-only placeholder.
    fn open_brace(&mut self, c: char) -> FormatResult<State> {
        if c == '{' {
            self.out.push('{');
            return Ok(State::Plain);
        }
        match self.binding {
            Binding::Named(_) => {
                if is_identifier_start(c) {
                    self.t.put_back();
                    Ok(State::Reference)
                } else {
                    Err(self.malformed())
                }
            }
            Binding::Indexed(_) => match c {
                '}' => {
                    self.bind_auto()?;
                    self.t.put_back();
                    Ok(State::End)
                }
                '0'..='9' => {
                    if self.used_auto {
                        return Err(FormatError::IndexingModeConflict);
                    }
                    self.used_manual = true;
                    self.t.put_back();
                    Ok(State::Reference)
                }
                ':' => {
                    // `{:spec}`: an automatic placeholder with a spec.
                    self.bind_auto()?;
                    Ok(State::Spec)
                }
                _ => Err(self.malformed()),
            },
        }
    }

    /// Bind the current automatic index and bump the counter.
    fn bind_auto(&mut self) -> FormatResult<()> {
        if self.used_manual {
            return Err(FormatError::IndexingModeConflict);
        }
        self.used_auto = true;
        self.target = Target::Index(self.auto_count);
        self.auto_count += 1;
        Ok(())
    }

    /// Read the full index or name; the next rune must close the
    /// placeholder or open a spec.
    fn reference(&mut self, _c: char) -> FormatResult<State> {
        self.t.put_back();
        self.target = match self.binding {
            Binding::Named(_) => Target::Name(self.t.next_identifier()),
            Binding::Indexed(_) => Target::Index(self.t.next_unsigned_int()),
        };
        if !self.t.has_next() {
            return Err(self.malformed());
        }
        match self.t.next_rune() {
            '}' => {
                self.t.put_back();
                Ok(State::End)
            }
            ':' => Ok(State::Spec),
            _ => Err(self.malformed()),
        }
    }

    /// Detect a padding clause: an alignment marker either immediately or
    /// after a single fill rune. Both runes are put back for re-consumption
    /// by the next state.
    fn spec_head(&mut self, c: char) -> State {
        if align_of(c).is_some() {
            self.t.put_back();
            return State::Padding;
        }
        if self.t.has_next() {
            let marker = self.t.next_rune();
            if align_of(marker).is_some() {
                self.spec.fill = c;
                self.t.put_back();
                return State::Padding;
            }
            self.t.put_back();
        }
        self.t.put_back();
        State::Fraction
    }

    fn padding(&mut self, c: char) -> FormatResult<State> {
        let Some(align) = align_of(c) else {
            return Err(self.malformed());
        };
        self.spec.align = Some(align);
        self.spec.width = self.t.next_unsigned_int();
        Ok(State::Fraction)
    }

    fn fraction(&mut self, c: char) -> State {
        if c == '.' {
            self.spec.precision = Some(self.t.next_unsigned_int());
        } else {
            self.t.put_back();
        }
        State::Verb
    }

    fn verb(&mut self, c: char) -> FormatResult<State> {
        let mut c = c;
        if c == '#' {
            self.spec.alternate = true;
            if !self.t.has_next() {
                return Err(self.malformed());
            }
            c = self.t.next_rune();
        }
        if let Some(verb) = Verb::from_rune(c) {
            self.spec.verb = Some(verb);
            Ok(State::End)
        } else if c == '}' {
            self.t.put_back();
            Ok(State::End)
        } else {
            Err(self.malformed())
        }
    }

    /// Close the placeholder: resolve, render, reset scratch.
    fn end(&mut self, c: char) -> FormatResult<State> {
        if c != '}' {
            return Err(self.malformed());
        }
        let value = self.resolve()?;
        render(self.out, &value, &self.spec)?;
        self.spec.reset();
        Ok(State::Plain)
    }

    /// Resolve the bound parameter.
    ///
    /// A positional index past the end of the argument slice is a caller
    /// contract violation and panics like any slice indexing bug.
    fn resolve(&self) -> FormatResult<Value> {
        match (&self.binding, &self.target) {
            (Binding::Indexed(args), Target::Index(i)) => Ok(args[*i].clone()),
            (Binding::Named(source), Target::Name(name)) => {
                source
                    .get(name)
                    .ok_or_else(|| FormatError::ParameterNotFound { name: name.clone() })
            }
            _ => unreachable!("binding mode and target kind always agree"),
        }
    }
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}
