use byteorder::{ByteOrder, LittleEndian};

const UNKNOWN_CHAR: char = '*';
const GEN3_TERMINATOR: u8 = 0xff;
const GEN4_TERMINATOR: u16 = 0xffff;

const GEN3_HIRAGANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんぁぃぅぇぉゃゅょがぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽっ";
const GEN3_KATAKANA: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲンァィゥェォャュョガギグゲゴザジズゼゾダヂヅデドバビブベボパピプペポッ";

pub fn decode_gen3(text_data: &[u8], japanese: bool) -> String {
    let mut out_text = String::new();
    for byte in text_data {
        if *byte == GEN3_TERMINATOR {
            break;
        }
        let decoded_char = if japanese {
            gen3_japanese_char(*byte)
        } else {
            gen3_latin_char(*byte)
        };
        out_text.push(decoded_char);
    }

    out_text
}

fn gen3_japanese_char(byte: u8) -> char {
    match byte {
        0x00 => '\u{3000}',
        0x01..=0x50 => GEN3_HIRAGANA
            .chars()
            .nth(byte as usize - 0x01)
            .unwrap_or(UNKNOWN_CHAR),
        0x51..=0xa0 => GEN3_KATAKANA
            .chars()
            .nth(byte as usize - 0x51)
            .unwrap_or(UNKNOWN_CHAR),
        0xad => '。',
        0xae => 'ー',
        0xb0 => '‥',
        0xb1 => '『',
        0xb2 => '』',
        0xb3 => '「',
        0xb4 => '」',
        0xb7 => '円',
        0xb8 => '.',
        _ => gen3_latin_char(byte),
    }
}

fn gen3_latin_char(byte: u8) -> char {
    match byte {
        0x00 => ' ',
        0x01 => 'À',
        0x02 => 'Á',
        0x03 => 'Â',
        0x04 => 'Ç',
        0x05 => 'È',
        0x06 => 'É',
        0x07 => 'Ê',
        0x08 => 'Ë',
        0x09 => 'Ì',
        0x0b => 'Î',
        0x0c => 'Ï',
        0x0d => 'Ò',
        0x0e => 'Ó',
        0x0f => 'Ô',
        0x10 => 'Œ',
        0x11 => 'Ù',
        0x12 => 'Ú',
        0x13 => 'Û',
        0x14 => 'Ñ',
        0x15 => 'ß',
        0x16 => 'à',
        0x17 => 'á',
        0x19 => 'ç',
        0x1a => 'è',
        0x1b => 'é',
        0x1c => 'ê',
        0x1d => 'ë',
        0x1e => 'ì',
        0x20 => 'î',
        0x21 => 'ï',
        0x22 => 'ò',
        0x23 => 'ó',
        0x24 => 'ô',
        0x25 => 'œ',
        0x26 => 'ù',
        0x27 => 'ú',
        0x28 => 'û',
        0x29 => 'ñ',
        0x2a => 'º',
        0x2b => 'ª',
        0x2d => '&',
        0x2e => '+',
        0x35 => '=',
        0x36 => ';',
        0x51 => '¿',
        0x52 => '¡',
        0x5a => 'Í',
        0x5b => '%',
        0x5c => '(',
        0x5d => ')',
        0x68 => 'â',
        0x6f => 'í',
        0xa1..=0xaa => (b'0' + (byte - 0xa1)) as char,
        0xab => '!',
        0xac => '?',
        0xad => '.',
        0xae => '-',
        0xaf => '・',
        0xb0 => '…',
        0xb1 => '“',
        0xb2 => '”',
        0xb3 => '‘',
        0xb4 => '’',
        0xb5 => '♂',
        0xb6 => '♀',
        0xb7 => '$',
        0xb8 => ',',
        0xb9 => '×',
        0xba => '/',
        0xbb..=0xd4 => (b'A' + (byte - 0xbb)) as char,
        0xd5..=0xee => (b'a' + (byte - 0xd5)) as char,
        0xf0 => ':',
        0xf1 => 'Ä',
        0xf2 => 'Ö',
        0xf3 => 'Ü',
        0xf4 => 'ä',
        0xf5 => 'ö',
        0xf6 => 'ü',
        _ => UNKNOWN_CHAR,
    }
}

/// Decode a DS string of little-endian 16-bit codes, stopping at 0xFFFF.
pub fn decode_gen4(text_data: &[u8]) -> String {
    text_data
        .chunks_exact(2)
        .map(LittleEndian::read_u16)
        .take_while(|code| *code != GEN4_TERMINATOR)
        .map(gen4_char)
        .collect()
}

fn gen4_char(code: u16) -> char {
    match code {
        0x0001 => '\u{3000}',
        0x0121..=0x012a => char::from(b'0' + (code - 0x0121) as u8),
        0x012b..=0x0144 => char::from(b'A' + (code - 0x012b) as u8),
        0x0145..=0x015e => char::from(b'a' + (code - 0x0145) as u8),
        0x01ab => '!',
        0x01ac => '?',
        0x01ad => ',',
        0x01ae => '.',
        0x01af => '…',
        0x01b0 => '・',
        0x01b1 => '/',
        0x01b2 => '‘',
        0x01b3 => '’',
        0x01b4 => '“',
        0x01b5 => '”',
        0x01b6 => '„',
        0x01b7 => '«',
        0x01b8 => '»',
        0x01b9 => '(',
        0x01ba => ')',
        0x01bb => '♂',
        0x01bc => '♀',
        0x01bd => '+',
        0x01be => '-',
        0x01bf => '*',
        0x01c0 => '#',
        0x01c1 => '=',
        0x01c2 => '&',
        0x01c3 => '~',
        0x01c4 => ':',
        0x01c5 => ';',
        0x01d0 => '@',
        0x01d2 => '%',
        0x01de => ' ',
        _ => UNKNOWN_CHAR,
    }
}

/// The DS games keep trainer names in capitals; present them as "Roy" rather than "ROY".
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
