//! Phrase assembly: decomposition + resolved locale → display string.
//!
//! Stages run in a fixed order: idiom and "just now" short-circuits, the
//! single-unit framed override, per-unit rendering, joining, then framing.
//! Every locale lookup goes through [`ResolvedLocale`], so fallback and
//! plural selection behave identically at each stage.

use crate::decompose::{Decomposition, UnitCount};
use crate::error::HumanizeError;
use crate::locale::{NearNow, interpolate};
use crate::options::{FormatOptions, Join, Syntax};
use crate::registry::ResolvedLocale;
use crate::unit::Unit;

/// One rendered unit phrase, before joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseToken {
    pub unit: Unit,
    pub count: u64,
    pub text: String,
}

/// Render a decomposition in the given locale.
pub fn assemble(
    decomposition: &Decomposition,
    locale: &ResolvedLocale,
    options: &FormatOptions,
) -> Result<String, HumanizeError> {
    if let Some(idiom) = decomposition.idiom {
        return Ok(locale.word(idiom)?.to_string());
    }
    if decomposition.zero && options.syntax == Syntax::RelativeToNow {
        return Ok(locale.word(NearNow::JustNow)?.to_string());
    }

    let frame = options.syntax.frame(decomposition.negative);

    if let (Some(frame), [only]) = (frame, decomposition.units.as_slice())
        && !options.short
        && let Some(phrase) = locale.render_unit_relative(frame, only.unit, only.count)
    {
        tracing::trace!(locale = locale.id(), %frame, unit = %only.unit, "unit-relative override");
        return Ok(phrase);
    }

    let tokens = render_tokens(&decomposition.units, locale, options)?;
    let joined = join_tokens(&tokens, locale, &options.join)?;

    match frame {
        Some(frame) => {
            let template = locale.relative(frame)?;
            Ok(interpolate(template, &[("time", &joined)]))
        }
        None => Ok(joined),
    }
}

/// Render each unit through the locale chain.
pub fn render_tokens(
    units: &[UnitCount],
    locale: &ResolvedLocale,
    options: &FormatOptions,
) -> Result<Vec<PhraseToken>, HumanizeError> {
    units
        .iter()
        .map(|uc| {
            let text = if options.a_unit && !options.short && uc.count == 1 {
                locale.article(uc.unit)?.to_string()
            } else {
                locale.render_unit(uc.unit, uc.count, options.short)?
            };
            Ok(PhraseToken {
                unit: uc.unit,
                count: uc.count,
                text,
            })
        })
        .collect()
}

fn join_tokens(
    tokens: &[PhraseToken],
    locale: &ResolvedLocale,
    join: &Join,
) -> Result<String, HumanizeError> {
    let texts: Vec<String> = tokens.iter().map(|t| t.text.clone()).collect();
    let joined = match join {
        Join::None => texts.join(" "),
        Join::Separator(separator) => texts.join(separator),
        Join::Pair { separator, last } => join_pair(&texts, separator, last),
        Join::Default => {
            let list = locale.list()?;
            join_pair(&texts, &list.separator, &list.last)
        }
        Join::Custom(f) => f(&texts),
    };
    Ok(joined)
}

/// `separator` between all but the last two items, `last` before the final one.
fn join_pair(texts: &[String], separator: &str, last: &str) -> String {
    match texts {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., tail] => {
            let mut out = head.join(separator);
            out.push_str(last);
            out.push_str(tail);
            out
        }
    }
}
