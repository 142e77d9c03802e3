//! nom grammar for the sound header.
//!
//! ```text
//! header      := (skip declaration)* skip
//! declaration := "const" type IDENT "[" "]" "=" "{" step ("," step)* ","? "}" ";"
//! step        := "{" wave "," int "," int "," int "," int "," int "," int "}"
//! wave        := (IDENT "::")* ("SQUARE" | "NOISE")
//! skip        := (whitespace | "//..." | "/*...*/" | "#...")*
//! ```

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace1},
    combinator::{all_consuming, cut, map, map_res, opt, recognize, value},
    error::{context, VerboseError},
    multi::{many0, many0_count, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use super::NamedSequence;
use crate::sound_fx::{SoundStep, Waveform};

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn line_comment(input: &str) -> Res<'_, ()> {
    value((), pair(tag("//"), opt(is_not("\n\r"))))(input)
}

fn block_comment(input: &str) -> Res<'_, ()> {
    value((), tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

fn directive(input: &str) -> Res<'_, ()> {
    value((), pair(char('#'), opt(is_not("\n\r"))))(input)
}

/// Whitespace, comments and preprocessor lines.
fn skip(input: &str) -> Res<'_, ()> {
    value(
        (),
        many0_count(alt((
            value((), multispace1),
            line_comment,
            block_comment,
            directive,
        ))),
    )(input)
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> Res<'a, O>
where
    F: FnMut(&'a str) -> Res<'a, O>,
{
    delimited(skip, inner, skip)
}

fn identifier(input: &str) -> Res<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// `Gamebuino_Meta::Sound_FX` or any other qualified type name.
fn path(input: &str) -> Res<'_, &str> {
    recognize(pair(identifier, many0_count(pair(tag("::"), identifier))))(input)
}

fn waveform(input: &str) -> Res<'_, Waveform> {
    context(
        "waveform",
        map_res(path, |p: &str| {
            let last = p.rsplit("::").next().unwrap_or(p);
            last.parse::<Waveform>()
        }),
    )(input)
}

fn integer(input: &str) -> Res<'_, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i64>)(input)
}

fn field<'a, T>(name: &'static str) -> impl FnMut(&'a str) -> Res<'a, T>
where
    T: TryFrom<i64>,
{
    context(name, map_res(ws(integer), T::try_from))
}

fn flag(input: &str) -> Res<'_, bool> {
    context(
        "arpeggio",
        map_res(ws(integer), |v| match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(()),
        }),
    )(input)
}

fn comma(input: &str) -> Res<'_, char> {
    ws(char(','))(input)
}

fn step(input: &str) -> Res<'_, SoundStep> {
    let (input, _) = ws(char('{'))(input)?;
    let (input, (waveform, _, arpeggio, _, volume, _, slide_start, _, slide_end, _, pitch, _, duration)) =
        cut(tuple((
            ws(waveform),
            comma,
            flag,
            comma,
            field::<u8>("volume"),
            comma,
            field::<i8>("volume_slide_start"),
            comma,
            field::<i8>("volume_slide_end"),
            comma,
            field::<u8>("pitch"),
            comma,
            field::<u8>("duration_ticks"),
        )))(input)?;
    let (input, _) = cut(ws(char('}')))(input)?;

    Ok((
        input,
        SoundStep::new(
            waveform,
            arpeggio,
            volume,
            slide_start,
            slide_end,
            pitch,
            duration,
        ),
    ))
}

fn step_list(input: &str) -> Res<'_, Vec<SoundStep>> {
    delimited(
        ws(char('{')),
        terminated(separated_list1(comma, step), opt(comma)),
        cut(ws(char('}'))),
    )(input)
}

fn declaration(input: &str) -> Res<'_, NamedSequence> {
    let (input, _) = ws(tag("const"))(input)?;
    let (input, _type_name) = cut(ws(path))(input)?;
    let (input, name) = cut(context("name", ws(identifier)))(input)?;
    let (input, _) = cut(tuple((ws(char('[')), ws(char(']')), ws(char('=')))))(input)?;
    let (input, steps) = cut(context("steps", step_list))(input)?;
    let (input, _) = cut(ws(char(';')))(input)?;

    Ok((
        input,
        NamedSequence {
            name: name.to_string(),
            steps,
        },
    ))
}

/// Parse every declaration of a header.
pub(super) fn header(input: &str) -> Res<'_, Vec<NamedSequence>> {
    all_consuming(map(
        pair(many0(declaration), skip),
        |(decls, _)| decls,
    ))(input)
}

/// Parse a single step literal such as `{ SQUARE, 0, 255, -128, 0, 10, 10 }`.
pub(super) fn single_step(input: &str) -> Res<'_, SoundStep> {
    all_consuming(preceded(skip, terminated(step, skip)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_waveform() {
        let (_, w) = waveform("Gamebuino_Meta::Sound_FX_Wave::NOISE").unwrap();
        assert_eq!(w, Waveform::Noise);
        let (_, w) = waveform("SQUARE").unwrap();
        assert_eq!(w, Waveform::Square);
    }

    #[test]
    fn test_step_literal() {
        let (rest, s) = step("{ Gamebuino_Meta::Sound_FX_Wave::SQUARE, 0, 255, 0, -6, 13, 10 }").unwrap();
        assert!(rest.is_empty());
        assert_eq!(s, SoundStep::square(false, 255, 0, -6, 13, 10));
    }

    #[test]
    fn test_out_of_range_volume() {
        assert!(step("{ SQUARE, 0, 256, 0, 0, 13, 10 }").is_err());
    }

    #[test]
    fn test_out_of_range_slide() {
        assert!(step("{ SQUARE, 0, 255, -129, 0, 13, 10 }").is_err());
        assert!(step("{ SQUARE, 0, 255, 0, 128, 13, 10 }").is_err());
    }

    #[test]
    fn test_skip_comments_and_directives() {
        let input = "/* banner\n * text */\n#pragma once\n// note\n  ";
        let (rest, _) = skip(input).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn test_declaration_with_trailing_comma() {
        let input = "const Sound_FX SFX_X[] = {\n  { NOISE, 0, 0, 0, 0, 0, 0 },\n};";
        let (_, decl) = declaration(input).unwrap();
        assert_eq!(decl.name, "SFX_X");
        assert_eq!(decl.steps, vec![SoundStep::TERMINATOR]);
    }
}
