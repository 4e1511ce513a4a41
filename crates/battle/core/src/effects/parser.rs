use super::{EffectKind, EquippedItem, ParsedSpecialEffect};

/// One authored phrasing: `prefix`, an optional number, `suffix`.
struct Phrasing {
    prefix: &'static str,
    suffix: &'static str,
    kind: EffectKind,
    /// Value used when the phrasing carries no number.
    fixed_value: Option<i32>,
}

/// Known phrasings, tried in order. Matching is ASCII case-insensitive.
const PHRASINGS: &[Phrasing] = &[
    Phrasing {
        prefix: "perfect answers deal +",
        suffix: " bonus damage",
        kind: EffectKind::BonusDamageOnPerfect,
        fixed_value: None,
    },
    Phrasing {
        prefix: "correct answers heal ",
        suffix: " hp",
        kind: EffectKind::HealOnCorrect,
        fixed_value: None,
    },
    Phrasing {
        prefix: "critical hits deal double damage",
        suffix: "",
        kind: EffectKind::DoubleCritDamage,
        fixed_value: Some(2),
    },
    Phrasing {
        prefix: "+",
        suffix: "% gold from combat",
        kind: EffectKind::GoldBonusPct,
        fixed_value: None,
    },
];

impl Phrasing {
    fn matches(&self, text: &str) -> Option<i32> {
        let rest = strip_prefix_ignore_case(text, self.prefix)?;
        let number = strip_suffix_ignore_case(rest, self.suffix)?;
        match self.fixed_value {
            Some(value) => number.is_empty().then_some(value),
            None => parse_amount(number),
        }
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    let tail = text.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &text[..split])
}

fn parse_amount(text: &str) -> Option<i32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Decodes one equipment effect description.
///
/// Recognized phrasings:
///
/// ```text
/// Perfect answers deal +N bonus damage   -> bonus_damage_on_perfect(N)
/// Correct answers heal N HP              -> heal_on_correct(N)
/// Critical hits deal double damage       -> double_crit_damage(2)
/// +N% gold from combat                   -> gold_bonus_pct(N)
/// ```
///
/// Surrounding whitespace and a single trailing period are ignored. Any other
/// text decodes to [`EffectKind::Unknown`] with value 0.
pub fn parse_special_effect(text: &str, item_name: &str) -> ParsedSpecialEffect {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed).trim_end();

    PHRASINGS
        .iter()
        .find_map(|phrasing| {
            phrasing
                .matches(trimmed)
                .map(|value| ParsedSpecialEffect::new(phrasing.kind, value, item_name))
        })
        .unwrap_or_else(|| ParsedSpecialEffect::new(EffectKind::Unknown, 0, item_name))
}

/// Decodes the effects of every equipped item, dropping unknown ones.
///
/// Items without effect text are skipped. Order follows `items`.
pub fn parse_equipment_effects<'a, I>(items: I) -> Vec<ParsedSpecialEffect>
where
    I: IntoIterator<Item = &'a EquippedItem>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let text = item.special_effect.as_deref()?;
            let effect = parse_special_effect(text, &item.name);
            (!effect.is_unknown()).then_some(effect)
        })
        .collect()
}
