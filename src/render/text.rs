//! Plain-text rendering for terminals

use super::plan::Card;
use super::surface::Container;

/// Turn inline markup into readable text.
///
/// `<br>` and closing block tags become line breaks, every other tag is
/// dropped, and entities are decoded. A `<` only opens a tag when a letter,
/// `/` or `!` follows it; otherwise it is literal text. Blank lines are
/// removed.
pub fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let opens_tag = after[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');

        match after.find('>') {
            Some(end) if opens_tag => {
                if breaks_line(&after[1..end]) {
                    out.push('\n');
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('<');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);

    decode_entities(&out)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn breaks_line(tag: &str) -> bool {
    let tag = tag.trim().trim_end_matches('/').trim().to_ascii_lowercase();
    let name = tag.split_whitespace().next().unwrap_or("");
    matches!(
        name,
        "br" | "/p" | "/div" | "/li" | "/ul" | "/ol" | "/h1" | "/h2" | "/h3" | "/tr" | "li"
    )
}

/// Longest entity name we try to decode, without `&` and `;`
const MAX_ENTITY_LEN: usize = 10;

/// Decode numeric references and the named entities common in
/// Portuguese markup. Unknown entities are kept as written.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let decoded = after
            .find(';')
            .filter(|&end| end > 0 && end <= MAX_ENTITY_LEN)
            .and_then(|end| entity_char(&after[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity_char(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "nbsp" => ' ',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "amp" => '&',
        "deg" => '°',
        "ordm" => 'º',
        "ordf" => 'ª',
        "aacute" => 'á',
        "agrave" => 'à',
        "acirc" => 'â',
        "atilde" => 'ã',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "iacute" => 'í',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "otilde" => 'õ',
        "uacute" => 'ú',
        "ccedil" => 'ç',
        "Aacute" => 'Á',
        "Atilde" => 'Ã',
        "Eacute" => 'É',
        "Oacute" => 'Ó',
        "Ccedil" => 'Ç',
        _ => return None,
    };
    Some(c)
}

/// Text lines for one card: heading, picture, specifications, history, link
pub fn card_lines(card: &Card) -> Vec<String> {
    let mut lines = vec![card.heading.clone()];
    if !card.image.src.is_empty() {
        lines.push(format!("[{}] {}", card.image.alt, card.image.src));
    }
    lines.extend(plain_text(&card.specifications).lines().map(String::from));
    if !card.history.is_empty() {
        lines.push(card.history.clone());
    }
    lines.push(format!("{} {}", card.link.label, card.link.href));
    lines
}

/// Whole container as text, cards separated by a blank line
pub fn container_text(container: &Container) -> String {
    if let Some(placeholder) = container.placeholder() {
        return placeholder.message.clone();
    }

    container
        .cards()
        .iter()
        .map(|card| card_lines(card).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
