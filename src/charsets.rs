//! Unicode charset table renderer for the Burgerlib docs.
//!
//! Four legacy 8 bit encodings are rendered as 16x16 HTML grids, one cell
//! per byte value. The low half of every encoding is plain ASCII, the high
//! half comes from a per-encoding lookup table. Cell titles come from a
//! fixed code point description table.

use crate::errors::BuildResult;
use crate::sync;
use crate::utils::configs::BuildContext;
use crate::utils::log::{log, LogLevel};

/// How a code point is displayed inside a table cell.
#[derive(Debug, PartialEq, Eq)]
pub enum Desc {
    /// A printable glyph, the name becomes the cell title.
    Graphic(&'static str),
    /// A control or symbol with no useful glyph: name plus abbreviation.
    Control(&'static str, &'static str),
}

/// Unicode descriptions for every code point the four charsets can reach,
/// sorted by code point for binary search.
static DESCRIPTIONS: &[(u32, Desc)] = &[
    (0x0000, Desc::Control("NULL", "NUL")),
    (0x0001, Desc::Control("START OF HEADING", "SOH")),
    (0x0002, Desc::Control("START OF TEXT", "STX")),
    (0x0003, Desc::Control("END OF TEXT", "ETX")),
    (0x0004, Desc::Control("END OF TRANSMISSION", "EOT")),
    (0x0005, Desc::Control("ENQUIRY", "ENQ")),
    (0x0006, Desc::Control("ACKNOWLEDGE", "ACK")),
    (0x0007, Desc::Control("BELL", "BEL")),
    (0x0008, Desc::Control("BACKSPACE", "BS")),
    (0x0009, Desc::Control("CHARACTER TABULATION", "HT")),
    (0x000A, Desc::Control("LINE FEED (LF)", "LF")),
    (0x000B, Desc::Control("LINE TABULATION", "VT")),
    (0x000C, Desc::Control("FORM FEED (FF)", "FF")),
    (0x000D, Desc::Control("CARRIAGE RETURN (CR)", "CR")),
    (0x000E, Desc::Control("SHIFT OUT", "SO")),
    (0x000F, Desc::Control("SHIFT IN", "SI")),
    (0x0010, Desc::Control("DATA LINK ESCAPE", "DLE")),
    (0x0011, Desc::Control("DEVICE CONTROL ONE", "DC1")),
    (0x0012, Desc::Control("DEVICE CONTROL TWO", "DC2")),
    (0x0013, Desc::Control("DEVICE CONTROL THREE", "DC3")),
    (0x0014, Desc::Control("DEVICE CONTROL FOUR", "DC4")),
    (0x0015, Desc::Control("NEGATIVE ACKNOWLEDGE", "NAK")),
    (0x0016, Desc::Control("SYNCHRONOUS IDLE", "SYN")),
    (0x0017, Desc::Control("END OF TRANSMISSION BLOCK", "ETB")),
    (0x0018, Desc::Control("CANCEL", "CAN")),
    (0x0019, Desc::Control("END OF MEDIUM", "EM")),
    (0x001A, Desc::Control("SUBSTITUTE", "SUB")),
    (0x001B, Desc::Control("ESCAPE", "ESC")),
    (0x001C, Desc::Control("INFORMATION SEPARATOR FOUR", "FS")),
    (0x001D, Desc::Control("INFORMATION SEPARATOR THREE", "GS")),
    (0x001E, Desc::Control("INFORMATION SEPARATOR TWO", "RS")),
    (0x001F, Desc::Control("INFORMATION SEPARATOR ONE", "US")),
    (0x0020, Desc::Graphic("SPACE")),
    (0x0021, Desc::Graphic("EXCLAMATION MARK")),
    (0x0022, Desc::Graphic("QUOTATION MARK")),
    (0x0023, Desc::Graphic("NUMBER SIGN")),
    (0x0024, Desc::Graphic("DOLLAR SIGN")),
    (0x0025, Desc::Graphic("PERCENT SIGN")),
    (0x0026, Desc::Graphic("AMPERSAND")),
    (0x0027, Desc::Graphic("APOSTROPHE")),
    (0x0028, Desc::Graphic("LEFT PARENTHESIS")),
    (0x0029, Desc::Graphic("RIGHT PARENTHESIS")),
    (0x002A, Desc::Graphic("ASTERISK")),
    (0x002B, Desc::Graphic("PLUS SIGN")),
    (0x002C, Desc::Graphic("COMMA")),
    (0x002D, Desc::Graphic("HYPHEN-MINUS")),
    (0x002E, Desc::Graphic("FULL STOP")),
    (0x002F, Desc::Graphic("SOLIDUS")),
    (0x0030, Desc::Graphic("DIGIT ZERO")),
    (0x0031, Desc::Graphic("DIGIT ONE")),
    (0x0032, Desc::Graphic("DIGIT TWO")),
    (0x0033, Desc::Graphic("DIGIT THREE")),
    (0x0034, Desc::Graphic("DIGIT FOUR")),
    (0x0035, Desc::Graphic("DIGIT FIVE")),
    (0x0036, Desc::Graphic("DIGIT SIX")),
    (0x0037, Desc::Graphic("DIGIT SEVEN")),
    (0x0038, Desc::Graphic("DIGIT EIGHT")),
    (0x0039, Desc::Graphic("DIGIT NINE")),
    (0x003A, Desc::Graphic("COLON")),
    (0x003B, Desc::Graphic("SEMICOLON")),
    (0x003C, Desc::Graphic("LESS-THAN SIGN")),
    (0x003D, Desc::Graphic("EQUALS SIGN")),
    (0x003E, Desc::Graphic("GREATER-THAN SIGN")),
    (0x003F, Desc::Graphic("QUESTION MARK")),
    (0x0040, Desc::Graphic("COMMERCIAL AT")),
    (0x0041, Desc::Graphic("LATIN CAPITAL LETTER A")),
    (0x0042, Desc::Graphic("LATIN CAPITAL LETTER B")),
    (0x0043, Desc::Graphic("LATIN CAPITAL LETTER C")),
    (0x0044, Desc::Graphic("LATIN CAPITAL LETTER D")),
    (0x0045, Desc::Graphic("LATIN CAPITAL LETTER E")),
    (0x0046, Desc::Graphic("LATIN CAPITAL LETTER F")),
    (0x0047, Desc::Graphic("LATIN CAPITAL LETTER G")),
    (0x0048, Desc::Graphic("LATIN CAPITAL LETTER H")),
    (0x0049, Desc::Graphic("LATIN CAPITAL LETTER I")),
    (0x004A, Desc::Graphic("LATIN CAPITAL LETTER J")),
    (0x004B, Desc::Graphic("LATIN CAPITAL LETTER K")),
    (0x004C, Desc::Graphic("LATIN CAPITAL LETTER L")),
    (0x004D, Desc::Graphic("LATIN CAPITAL LETTER M")),
    (0x004E, Desc::Graphic("LATIN CAPITAL LETTER N")),
    (0x004F, Desc::Graphic("LATIN CAPITAL LETTER O")),
    (0x0050, Desc::Graphic("LATIN CAPITAL LETTER P")),
    (0x0051, Desc::Graphic("LATIN CAPITAL LETTER Q")),
    (0x0052, Desc::Graphic("LATIN CAPITAL LETTER R")),
    (0x0053, Desc::Graphic("LATIN CAPITAL LETTER S")),
    (0x0054, Desc::Graphic("LATIN CAPITAL LETTER T")),
    (0x0055, Desc::Graphic("LATIN CAPITAL LETTER U")),
    (0x0056, Desc::Graphic("LATIN CAPITAL LETTER V")),
    (0x0057, Desc::Graphic("LATIN CAPITAL LETTER W")),
    (0x0058, Desc::Graphic("LATIN CAPITAL LETTER X")),
    (0x0059, Desc::Graphic("LATIN CAPITAL LETTER Y")),
    (0x005A, Desc::Graphic("LATIN CAPITAL LETTER Z")),
    (0x005B, Desc::Graphic("LEFT SQUARE BRACKET")),
    (0x005C, Desc::Graphic("REVERSE SOLIDUS")),
    (0x005D, Desc::Graphic("RIGHT SQUARE BRACKET")),
    (0x005E, Desc::Graphic("CIRCUMFLEX ACCENT")),
    (0x005F, Desc::Graphic("LOW LINE")),
    (0x0060, Desc::Graphic("GRAVE ACCENT")),
    (0x0061, Desc::Graphic("LATIN SMALL LETTER A")),
    (0x0062, Desc::Graphic("LATIN SMALL LETTER B")),
    (0x0063, Desc::Graphic("LATIN SMALL LETTER C")),
    (0x0064, Desc::Graphic("LATIN SMALL LETTER D")),
    (0x0065, Desc::Graphic("LATIN SMALL LETTER E")),
    (0x0066, Desc::Graphic("LATIN SMALL LETTER F")),
    (0x0067, Desc::Graphic("LATIN SMALL LETTER G")),
    (0x0068, Desc::Graphic("LATIN SMALL LETTER H")),
    (0x0069, Desc::Graphic("LATIN SMALL LETTER I")),
    (0x006A, Desc::Graphic("LATIN SMALL LETTER J")),
    (0x006B, Desc::Graphic("LATIN SMALL LETTER K")),
    (0x006C, Desc::Graphic("LATIN SMALL LETTER L")),
    (0x006D, Desc::Graphic("LATIN SMALL LETTER M")),
    (0x006E, Desc::Graphic("LATIN SMALL LETTER N")),
    (0x006F, Desc::Graphic("LATIN SMALL LETTER O")),
    (0x0070, Desc::Graphic("LATIN SMALL LETTER P")),
    (0x0071, Desc::Graphic("LATIN SMALL LETTER Q")),
    (0x0072, Desc::Graphic("LATIN SMALL LETTER R")),
    (0x0073, Desc::Graphic("LATIN SMALL LETTER S")),
    (0x0074, Desc::Graphic("LATIN SMALL LETTER T")),
    (0x0075, Desc::Graphic("LATIN SMALL LETTER U")),
    (0x0076, Desc::Graphic("LATIN SMALL LETTER V")),
    (0x0077, Desc::Graphic("LATIN SMALL LETTER W")),
    (0x0078, Desc::Graphic("LATIN SMALL LETTER X")),
    (0x0079, Desc::Graphic("LATIN SMALL LETTER Y")),
    (0x007A, Desc::Graphic("LATIN SMALL LETTER Z")),
    (0x007B, Desc::Graphic("LEFT CURLY BRACKET")),
    (0x007C, Desc::Graphic("VERTICAL LINE")),
    (0x007D, Desc::Graphic("RIGHT CURLY BRACKET")),
    (0x007E, Desc::Graphic("TILDE")),
    (0x007F, Desc::Control("DELETE", "DEL")),
    (0x0080, Desc::Control("PADDING CHARACTER", "PAD")),
    (0x0081, Desc::Control("HIGH OCTET PRESET", "HOP")),
    (0x0082, Desc::Control("BREAK PERMITTED HERE", "BPH")),
    (0x0083, Desc::Control("NO BREAK HERE", "NBH")),
    (0x0084, Desc::Control("INDEX", "IND")),
    (0x0085, Desc::Control("NEXT LINE", "NEL")),
    (0x0086, Desc::Control("START OF SELECTED AREA", "SSA")),
    (0x0087, Desc::Control("END OF SELECTED AREA", "ESA")),
    (0x0088, Desc::Control("CHARACTER TABULATION SET", "HTS")),
    (0x0089, Desc::Control("CHARACTER TABULATION WITH JUSTIFICATION", "HTJ")),
    (0x008A, Desc::Control("LINE TABULATION SET", "VTS")),
    (0x008B, Desc::Control("PARTIAL LINE FORWARD", "PLD")),
    (0x008C, Desc::Control("PARTIAL LINE BACKWARD", "PLU")),
    (0x008D, Desc::Control("REVERSE LINE FEED", "RI")),
    (0x008E, Desc::Control("SINGLE SHIFT TWO", "SS2")),
    (0x008F, Desc::Control("SINGLE SHIFT THREE", "SS3")),
    (0x0090, Desc::Control("DEVICE CONTROL STRING", "DCS")),
    (0x0091, Desc::Control("PRIVATE USE ONE", "PU1")),
    (0x0092, Desc::Control("PRIVATE USE TWO", "PU2")),
    (0x0093, Desc::Control("SET TRANSMIT STATE", "STS")),
    (0x0094, Desc::Control("CANCEL CHARACTER", "CCH")),
    (0x0095, Desc::Control("MESSAGE WAITING", "MW")),
    (0x0096, Desc::Control("START OF PROTECTED AREA", "SPA")),
    (0x0097, Desc::Control("END OF PROTECTED AREA", "EPA")),
    (0x0098, Desc::Control("START OF STRING", "SOS")),
    (0x0099, Desc::Control("SINGLE GRAPHIC CHARACTER INTRODUCER", "SGCI")),
    (0x009A, Desc::Control("SINGLE CHARACTER INTRODUCER", "SCI")),
    (0x009B, Desc::Control("CONTROL SEQUENCE INTRODUCER", "CSI")),
    (0x009C, Desc::Control("STRING TERMINATOR", "ST")),
    (0x009D, Desc::Control("OPERATING SYSTEM COMMAND", "OSC")),
    (0x009E, Desc::Control("PRIVATE MESSAGE", "PM")),
    (0x009F, Desc::Control("APPLICATION PROGRAM COMMAND", "APC")),
    (0x00A0, Desc::Graphic("NO-BREAK SPACE")),
    (0x00A1, Desc::Graphic("INVERTED EXCLAMATION MARK")),
    (0x00A2, Desc::Graphic("CENT SIGN")),
    (0x00A3, Desc::Graphic("POUND SIGN")),
    (0x00A4, Desc::Graphic("CURRENCY SIGN")),
    (0x00A5, Desc::Graphic("YEN SIGN")),
    (0x00A6, Desc::Graphic("BROKEN BAR")),
    (0x00A7, Desc::Graphic("SECTION SIGN")),
    (0x00A8, Desc::Graphic("DIAERESIS")),
    (0x00A9, Desc::Graphic("COPYRIGHT SIGN")),
    (0x00AA, Desc::Graphic("FEMININE ORDINAL INDICATOR")),
    (0x00AB, Desc::Graphic("LEFT-POINTING DOUBLE ANGLE QUOTATION MARK")),
    (0x00AC, Desc::Graphic("NOT SIGN")),
    (0x00AD, Desc::Graphic("SOFT HYPHEN")),
    (0x00AE, Desc::Graphic("REGISTERED SIGN")),
    (0x00AF, Desc::Graphic("MACRON")),
    (0x00B0, Desc::Graphic("DEGREE SIGN")),
    (0x00B1, Desc::Graphic("PLUS-MINUS SIGN")),
    (0x00B2, Desc::Graphic("SUPERSCRIPT TWO")),
    (0x00B3, Desc::Graphic("SUPERSCRIPT THREE")),
    (0x00B4, Desc::Graphic("ACUTE ACCENT")),
    (0x00B5, Desc::Graphic("MICRO SIGN")),
    (0x00B6, Desc::Graphic("PILCROW SIGN")),
    (0x00B7, Desc::Graphic("MIDDLE DOT")),
    (0x00B8, Desc::Graphic("CEDILLA")),
    (0x00B9, Desc::Graphic("SUPERSCRIPT ONE")),
    (0x00BA, Desc::Graphic("MASCULINE ORDINAL INDICATOR")),
    (0x00BB, Desc::Graphic("RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK")),
    (0x00BC, Desc::Graphic("VULGAR FRACTION ONE QUARTER")),
    (0x00BD, Desc::Graphic("VULGAR FRACTION ONE HALF")),
    (0x00BE, Desc::Graphic("VULGAR FRACTION THREE QUARTERS")),
    (0x00BF, Desc::Graphic("INVERTED QUESTION MARK")),
    (0x00C0, Desc::Graphic("LATIN CAPITAL LETTER A WITH GRAVE")),
    (0x00C1, Desc::Graphic("LATIN CAPITAL LETTER A WITH ACUTE")),
    (0x00C2, Desc::Graphic("LATIN CAPITAL LETTER A WITH CIRCUMFLEX")),
    (0x00C3, Desc::Graphic("LATIN CAPITAL LETTER A WITH TILDE")),
    (0x00C4, Desc::Graphic("LATIN CAPITAL LETTER A WITH DIAERESIS")),
    (0x00C5, Desc::Graphic("LATIN CAPITAL LETTER A WITH RING ABOVE")),
    (0x00C6, Desc::Graphic("LATIN CAPITAL LETTER AE")),
    (0x00C7, Desc::Graphic("LATIN CAPITAL LETTER C WITH CEDILLA")),
    (0x00C8, Desc::Graphic("LATIN CAPITAL LETTER E WITH GRAVE")),
    (0x00C9, Desc::Graphic("LATIN CAPITAL LETTER E WITH ACUTE")),
    (0x00CA, Desc::Graphic("LATIN CAPITAL LETTER E WITH CIRCUMFLEX")),
    (0x00CB, Desc::Graphic("LATIN CAPITAL LETTER E WITH DIAERESIS")),
    (0x00CC, Desc::Graphic("LATIN CAPITAL LETTER I WITH GRAVE")),
    (0x00CD, Desc::Graphic("LATIN CAPITAL LETTER I WITH ACUTE")),
    (0x00CE, Desc::Graphic("LATIN CAPITAL LETTER I WITH CIRCUMFLEX")),
    (0x00CF, Desc::Graphic("LATIN CAPITAL LETTER I WITH DIAERESIS")),
    (0x00D0, Desc::Graphic("LATIN CAPITAL LETTER ETH")),
    (0x00D1, Desc::Graphic("LATIN CAPITAL LETTER N WITH TILDE")),
    (0x00D2, Desc::Graphic("LATIN CAPITAL LETTER O WITH GRAVE")),
    (0x00D3, Desc::Graphic("LATIN CAPITAL LETTER O WITH ACUTE")),
    (0x00D4, Desc::Graphic("LATIN CAPITAL LETTER O WITH CIRCUMFLEX")),
    (0x00D5, Desc::Graphic("LATIN CAPITAL LETTER O WITH TILDE")),
    (0x00D6, Desc::Graphic("LATIN CAPITAL LETTER O WITH DIAERESIS")),
    (0x00D7, Desc::Graphic("MULTIPLICATION SIGN")),
    (0x00D8, Desc::Graphic("LATIN CAPITAL LETTER O WITH STROKE")),
    (0x00D9, Desc::Graphic("LATIN CAPITAL LETTER U WITH GRAVE")),
    (0x00DA, Desc::Graphic("LATIN CAPITAL LETTER U WITH ACUTE")),
    (0x00DB, Desc::Graphic("LATIN CAPITAL LETTER U WITH CIRCUMFLEX")),
    (0x00DC, Desc::Graphic("LATIN CAPITAL LETTER U WITH DIAERESIS")),
    (0x00DD, Desc::Graphic("LATIN CAPITAL LETTER Y WITH ACUTE")),
    (0x00DE, Desc::Graphic("LATIN CAPITAL LETTER THORN")),
    (0x00DF, Desc::Graphic("LATIN SMALL LETTER SHARP S")),
    (0x00E0, Desc::Graphic("LATIN SMALL LETTER A WITH GRAVE")),
    (0x00E1, Desc::Graphic("LATIN SMALL LETTER A WITH ACUTE")),
    (0x00E2, Desc::Graphic("LATIN SMALL LETTER A WITH CIRCUMFLEX")),
    (0x00E3, Desc::Graphic("LATIN SMALL LETTER A WITH TILDE")),
    (0x00E4, Desc::Graphic("LATIN SMALL LETTER A WITH DIAERESIS")),
    (0x00E5, Desc::Graphic("LATIN SMALL LETTER A WITH RING ABOVE")),
    (0x00E6, Desc::Graphic("LATIN SMALL LETTER AE")),
    (0x00E7, Desc::Graphic("LATIN SMALL LETTER C WITH CEDILLA")),
    (0x00E8, Desc::Graphic("LATIN SMALL LETTER E WITH GRAVE")),
    (0x00E9, Desc::Graphic("LATIN SMALL LETTER E WITH ACUTE")),
    (0x00EA, Desc::Graphic("LATIN SMALL LETTER E WITH CIRCUMFLEX")),
    (0x00EB, Desc::Graphic("LATIN SMALL LETTER E WITH DIAERESIS")),
    (0x00EC, Desc::Graphic("LATIN SMALL LETTER I WITH GRAVE")),
    (0x00ED, Desc::Graphic("LATIN SMALL LETTER I WITH ACUTE")),
    (0x00EE, Desc::Graphic("LATIN SMALL LETTER I WITH CIRCUMFLEX")),
    (0x00EF, Desc::Graphic("LATIN SMALL LETTER I WITH DIAERESIS")),
    (0x00F0, Desc::Graphic("LATIN SMALL LETTER ETH")),
    (0x00F1, Desc::Graphic("LATIN SMALL LETTER N WITH TILDE")),
    (0x00F2, Desc::Graphic("LATIN SMALL LETTER O WITH GRAVE")),
    (0x00F3, Desc::Graphic("LATIN SMALL LETTER O WITH ACUTE")),
    (0x00F4, Desc::Graphic("LATIN SMALL LETTER O WITH CIRCUMFLEX")),
    (0x00F5, Desc::Graphic("LATIN SMALL LETTER O WITH TILDE")),
    (0x00F6, Desc::Graphic("LATIN SMALL LETTER O WITH DIAERESIS")),
    (0x00F7, Desc::Graphic("DIVISION SIGN")),
    (0x00F8, Desc::Graphic("LATIN SMALL LETTER O WITH STROKE")),
    (0x00F9, Desc::Graphic("LATIN SMALL LETTER U WITH GRAVE")),
    (0x00FA, Desc::Graphic("LATIN SMALL LETTER U WITH ACUTE")),
    (0x00FB, Desc::Graphic("LATIN SMALL LETTER U WITH CIRCUMFLEX")),
    (0x00FC, Desc::Graphic("LATIN SMALL LETTER U WITH DIAERESIS")),
    (0x00FD, Desc::Graphic("LATIN SMALL LETTER Y WITH ACUTE")),
    (0x00FE, Desc::Graphic("LATIN SMALL LETTER THORN")),
    (0x00FF, Desc::Graphic("LATIN SMALL LETTER Y WITH DIAERESIS")),
    (0x011E, Desc::Graphic("LATIN CAPITAL LETTER G WITH BREVE")),
    (0x011F, Desc::Graphic("LATIN SMALL LETTER G WITH BREVE")),
    (0x0130, Desc::Graphic("LATIN CAPITAL LETTER I WITH DOT ABOVE")),
    (0x0131, Desc::Graphic("LATIN SMALL LETTER DOTLESS I")),
    (0x0152, Desc::Graphic("LATIN CAPITAL LIGATURE OE")),
    (0x0153, Desc::Graphic("LATIN SMALL LIGATURE OE")),
    (0x015E, Desc::Graphic("LATIN CAPITAL LETTER S WITH CEDILLA")),
    (0x015F, Desc::Graphic("LATIN SMALL LETTER S WITH CEDILLA")),
    (0x0160, Desc::Graphic("LATIN CAPITAL LETTER S WITH CARON")),
    (0x0161, Desc::Graphic("LATIN SMALL LETTER S WITH CARON")),
    (0x0178, Desc::Graphic("LATIN CAPITAL LETTER Y WITH DIAERESIS")),
    (0x017D, Desc::Graphic("LATIN CAPITAL LETTER Z WITH CARON")),
    (0x017E, Desc::Graphic("LATIN SMALL LETTER Z WITH CARON")),
    (0x0192, Desc::Graphic("LATIN SMALL LETTER F WITH HOOK")),
    (0x02C6, Desc::Graphic("MODIFIER LETTER CIRCUMFLEX ACCENT")),
    (0x02C7, Desc::Graphic("CARON")),
    (0x02D8, Desc::Graphic("BREVE")),
    (0x02D9, Desc::Graphic("DOT ABOVE")),
    (0x02DA, Desc::Graphic("RING ABOVE")),
    (0x02DB, Desc::Graphic("OGONEK")),
    (0x02DC, Desc::Graphic("SMALL TILDE")),
    (0x02DD, Desc::Graphic("DOUBLE ACUTE ACCENT")),
    (0x0393, Desc::Graphic("GREEK CAPITAL LETTER GAMMA")),
    (0x0398, Desc::Graphic("GREEK CAPITAL LETTER THETA")),
    (0x03A3, Desc::Graphic("GREEK CAPITAL LETTER SIGMA")),
    (0x03A6, Desc::Graphic("GREEK CAPITAL LETTER PHI")),
    (0x03A9, Desc::Graphic("GREEK CAPITAL LETTER OMEGA")),
    (0x03B1, Desc::Graphic("GREEK SMALL LETTER ALPHA")),
    (0x03B4, Desc::Graphic("GREEK SMALL LETTER DELTA")),
    (0x03B5, Desc::Graphic("GREEK SMALL LETTER EPSILON")),
    (0x03C0, Desc::Graphic("GREEK SMALL LETTER PI")),
    (0x03C3, Desc::Graphic("GREEK SMALL LETTER SIGMA")),
    (0x03C4, Desc::Graphic("GREEK SMALL LETTER TAU")),
    (0x03C6, Desc::Graphic("GREEK SMALL LETTER PHI")),
    (0x2013, Desc::Graphic("EN DASH")),
    (0x2014, Desc::Graphic("EM DASH")),
    (0x2018, Desc::Graphic("LEFT SINGLE QUOTATION MARK")),
    (0x2019, Desc::Graphic("RIGHT SINGLE QUOTATION MARK")),
    (0x201A, Desc::Graphic("SINGLE LOW-9 QUOTATION MARK")),
    (0x201C, Desc::Graphic("LEFT DOUBLE QUOTATION MARK")),
    (0x201D, Desc::Graphic("RIGHT DOUBLE QUOTATION MARK")),
    (0x201E, Desc::Graphic("DOUBLE LOW-9 QUOTATION MARK")),
    (0x2020, Desc::Graphic("DAGGER")),
    (0x2021, Desc::Graphic("DOUBLE DAGGER")),
    (0x2022, Desc::Graphic("BULLET")),
    (0x2026, Desc::Graphic("HORIZONTAL ELLIPSIS")),
    (0x2030, Desc::Graphic("PER MILLE SIGN")),
    (0x2039, Desc::Graphic("LEFT GUILLEMET")),
    (0x203A, Desc::Graphic("RIGHT GUILLEMET")),
    (0x2044, Desc::Graphic("FRACTION SLASH")),
    (0x207F, Desc::Graphic("SUPERSCRIPT LATIN SMALL LETTER N")),
    (0x20A7, Desc::Graphic("PESETA SIGN")),
    (0x20AC, Desc::Graphic("EURO SIGN")),
    (0x2122, Desc::Graphic("TRADE MARK SIGN")),
    (0x2202, Desc::Graphic("PARTIAL DIFFERENTIAL")),
    (0x2206, Desc::Graphic("INCREMENT")),
    (0x220F, Desc::Graphic("N-ARY PRODUCT")),
    (0x2211, Desc::Graphic("N-ARY SUMMATION")),
    (0x2219, Desc::Graphic("BULLET POINT")),
    (0x221A, Desc::Graphic("SQUARE ROOT")),
    (0x221E, Desc::Graphic("INFINITY")),
    (0x2229, Desc::Graphic("INTERSECTION")),
    (0x222B, Desc::Graphic("INTEGRAL")),
    (0x2248, Desc::Graphic("ALMOST EQUAL TO")),
    (0x2260, Desc::Graphic("NOT EQUAL TO")),
    (0x2261, Desc::Graphic("TRIPLE BAR")),
    (0x2264, Desc::Graphic("LESS-THAN OR EQUAL TO")),
    (0x2265, Desc::Graphic("GREATER-THAN OR EQUAL TO")),
    (0x2310, Desc::Graphic("NEGATION")),
    (0x2320, Desc::Graphic("INTEGRAL TOP")),
    (0x2321, Desc::Graphic("INTEGRAL BOTTOM")),
    (0x2500, Desc::Graphic("BOX DRAWINGS LIGHT HORIZONTAL")),
    (0x2502, Desc::Graphic("BOX DRAWINGS LIGHT VERTICAL")),
    (0x250C, Desc::Graphic("BOX DRAWINGS LIGHT DOWN AND RIGHT")),
    (0x2510, Desc::Graphic("BOX DRAWINGS LIGHT DOWN AND LEFT")),
    (0x2514, Desc::Graphic("BOX DRAWINGS LIGHT UP AND RIGHT")),
    (0x2518, Desc::Graphic("BOX DRAWINGS LIGHT UP AND LEFT")),
    (0x251C, Desc::Graphic("BOX DRAWINGS LIGHT VERTICAL AND RIGHT")),
    (0x2524, Desc::Graphic("BOX DRAWINGS LIGHT VERTICAL AND LEFT")),
    (0x252C, Desc::Graphic("BOX DRAWINGS LIGHT DOWN AND HORIZONTAL")),
    (0x2534, Desc::Graphic("BOX DRAWINGS LIGHT UP AND HORIZONTAL")),
    (0x253C, Desc::Graphic("BOX DRAWINGS LIGHT VERTICAL AND HORIZONTAL")),
    (0x2550, Desc::Graphic("BOX DRAWINGS DOUBLE HORIZONTAL")),
    (0x2551, Desc::Graphic("BOX DRAWINGS DOUBLE VERTICAL")),
    (0x2552, Desc::Graphic("BOX DRAWINGS DOWN SINGLE AND RIGHT DOUBLE")),
    (0x2553, Desc::Graphic("BOX DRAWINGS DOWN DOUBLE AND RIGHT SINGLE")),
    (0x2554, Desc::Graphic("BOX DRAWINGS DOUBLE DOWN AND RIGHT")),
    (0x2555, Desc::Graphic("BOX DRAWINGS DOWN SINGLE AND LEFT DOUBLE")),
    (0x2556, Desc::Graphic("BOX DRAWINGS DOWN DOUBLE AND LEFT SINGLE")),
    (0x2557, Desc::Graphic("BOX DRAWINGS DOUBLE DOWN AND LEFT")),
    (0x2558, Desc::Graphic("BOX DRAWINGS UP SINGLE AND RIGHT DOUBLE")),
    (0x2559, Desc::Graphic("BOX DRAWINGS UP DOUBLE AND RIGHT SINGLE")),
    (0x255A, Desc::Graphic("BOX DRAWINGS DOUBLE UP AND RIGHT")),
    (0x255B, Desc::Graphic("BOX DRAWINGS UP SINGLE AND LEFT DOUBLE")),
    (0x255C, Desc::Graphic("BOX DRAWINGS UP DOUBLE AND LEFT SINGLE")),
    (0x255D, Desc::Graphic("BOX DRAWINGS DOUBLE UP AND LEFT")),
    (0x255E, Desc::Graphic("BOX DRAWINGS VERTICAL SINGLE AND RIGHT DOUBLE")),
    (0x255F, Desc::Graphic("BOX DRAWINGS VERTICAL DOUBLE AND RIGHT SINGLE")),
    (0x2560, Desc::Graphic("BOX DRAWINGS DOUBLE VERTICAL AND RIGHT")),
    (0x2561, Desc::Graphic("BOX DRAWINGS VERTICAL SINGLE AND LEFT DOUBLE")),
    (0x2562, Desc::Graphic("BOX DRAWINGS VERTICAL DOUBLE AND LEFT SINGLE")),
    (0x2563, Desc::Graphic("BOX DRAWINGS DOUBLE VERTICAL AND LEFT")),
    (0x2564, Desc::Graphic("BOX DRAWINGS DOWN SINGLE AND HORIZONTAL DOUBLE")),
    (0x2565, Desc::Graphic("BOX DRAWINGS DOWN DOUBLE AND HORIZONTAL SINGLE")),
    (0x2566, Desc::Graphic("BOX DRAWINGS DOUBLE DOWN AND HORIZONTAL")),
    (0x2567, Desc::Graphic("BOX DRAWINGS UP SINGLE AND HORIZONTAL DOUBLE")),
    (0x2568, Desc::Graphic("BOX DRAWINGS UP DOUBLE AND HORIZONTAL SINGLE")),
    (0x2569, Desc::Graphic("BOX DRAWINGS DOUBLE UP AND HORIZONTAL")),
    (0x256A, Desc::Graphic("BOX DRAWINGS VERTICAL SINGLE AND HORIZONTAL DOUBLE")),
    (0x256B, Desc::Graphic("BOX DRAWINGS VERTICAL DOUBLE AND HORIZONTAL SINGLE")),
    (0x256C, Desc::Graphic("BOX DRAWINGS DOUBLE VERTICAL AND HORIZONTAL")),
    (0x2580, Desc::Graphic("UPPER HALF BLOCK")),
    (0x2584, Desc::Graphic("LOWER HALF BLOCK")),
    (0x2588, Desc::Graphic("FULL BLOCK")),
    (0x258C, Desc::Graphic("LEFT HALF BLOCK")),
    (0x2590, Desc::Graphic("RIGHT HALF BLOCK")),
    (0x2591, Desc::Graphic("LIGHT SHADE")),
    (0x2592, Desc::Graphic("MEDIUM SHADE")),
    (0x2593, Desc::Graphic("DARK SHADE")),
    (0x25A0, Desc::Graphic("BLACK SQUARE")),
    (0x25CA, Desc::Graphic("LOZENGE")),
    (0xF8A0, Desc::Graphic("SMALL NUMBER ONE-F8A0")),
    (0xF8FF, Desc::Graphic("SOLID APPLE-F8FF")),
    (0xFB01, Desc::Graphic("LATIN SMALL LIGATURE FI")),
    (0xFB02, Desc::Graphic("LATIN SMALL LIGATURE FL")),
];

/// Looks up the description for a code point.
pub fn description(code: u32) -> Option<&'static Desc> {
    DESCRIPTIONS
        .binary_search_by_key(&code, |entry| entry.0)
        .ok()
        .map(|index| &DESCRIPTIONS[index].1)
}

/// Mac Roman US high half, taken from MacRomanUS::ToUTF16Table.
static MAC_ROMAN_US: [u16; 128] = [
    0x00C4, 0x00C5, 0x00C7, 0x00C9, 0x00D1, 0x00D6, 0x00DC, 0x00E1,
    0x00E0, 0x00E2, 0x00E4, 0x00E3, 0x00E5, 0x00E7, 0x00E9, 0x00E8,
    0x00EA, 0x00EB, 0x00ED, 0x00EC, 0x00EE, 0x00EF, 0x00F1, 0x00F3,
    0x00F2, 0x00F4, 0x00F6, 0x00F5, 0x00FA, 0x00F9, 0x00FB, 0x00FC,
    0x2020, 0x00B0, 0x00A2, 0x00A3, 0x00A7, 0x2022, 0x00B6, 0x00DF,
    0x00AE, 0x00A9, 0x2122, 0x00B4, 0x00A8, 0x2260, 0x00C6, 0x00D8,
    0x221E, 0x00B1, 0x2264, 0x2265, 0x00A5, 0x00B5, 0x2202, 0x2211,
    0x220F, 0x03C0, 0x222B, 0x00AA, 0x00BA, 0x03A9, 0x00E6, 0x00F8,
    0x00BF, 0x00A1, 0x00AC, 0x221A, 0x0192, 0x2248, 0x2206, 0x00AB,
    0x00BB, 0x2026, 0x00A0, 0x00C0, 0x00C3, 0x00D5, 0x0152, 0x0153,
    0x2013, 0x2014, 0x201C, 0x201D, 0x2018, 0x2019, 0x00F7, 0x25CA,
    0x00FF, 0x0178, 0x2044, 0x20AC, 0x2039, 0x203A, 0xFB01, 0xFB02,
    0x2021, 0x00B7, 0x201A, 0x201E, 0x2030, 0x00C2, 0x00CA, 0x00C1,
    0x00CB, 0x00C8, 0x00CD, 0x00CE, 0x00CF, 0x00CC, 0x00D3, 0x00D4,
    0xF8FF, 0x00D2, 0x00DA, 0x00DB, 0x00D9, 0x0131, 0x02C6, 0x02DC,
    0x00AF, 0x02D8, 0x02D9, 0x02DA, 0x00B8, 0x02DD, 0x02DB, 0x02C7,
];

/// Windows code page 437 high half, taken from Win437::ToUTF16Table.
static WINDOWS_437: [u16; 128] = [
    0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7,
    0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5,
    0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9,
    0x00FF, 0x00D6, 0x00DC, 0x00A2, 0x00A3, 0x00A5, 0x20A7, 0x0192,
    0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA,
    0x00BF, 0x2310, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB,
    0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x2561, 0x2562, 0x2556,
    0x2555, 0x2563, 0x2551, 0x2557, 0x255D, 0x255C, 0x255B, 0x2510,
    0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x255E, 0x255F,
    0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x2567,
    0x2568, 0x2564, 0x2565, 0x2559, 0x2558, 0x2552, 0x2553, 0x256B,
    0x256A, 0x2518, 0x250C, 0x2588, 0x2584, 0x258C, 0x2590, 0x2580,
    0x03B1, 0x00DF, 0x0393, 0x03C0, 0x03A3, 0x03C3, 0x00B5, 0x03C4,
    0x03A6, 0x0398, 0x03A9, 0x03B4, 0x221E, 0x03C6, 0x03B5, 0x2229,
    0x2261, 0x00B1, 0x2265, 0x2264, 0x2320, 0x2321, 0x00F7, 0x2248,
    0x00B0, 0x2219, 0x00B7, 0x221A, 0x207F, 0x00B2, 0x25A0, 0x00A0,
];

/// Windows code page 1252 high half, taken from Win1252::ToUTF16Table.
static WINDOWS_1252: [u16; 128] = [
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
    0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0x008D, 0x017D, 0x008F,
    0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
    0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178,
    0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7,
    0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7,
    0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
    0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7,
    0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
    0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7,
    0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
    0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7,
    0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
    0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7,
    0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF,
];

/// One of the four fixed legacy encodings.
pub struct Charset {
    /// Display title used in the page header.
    pub title: &'static str,
    /// File stem of the generated page.
    pub slug: &'static str,
    /// Lookup table for bytes 0x80..=0xFF. `None` means the high half
    /// maps straight onto the same Unicode code points (ISO Latin-1).
    pub high_half: Option<&'static [u16; 128]>,
}

pub static CHARSETS: &[Charset] = &[
    Charset {
        title: "ISOLatin1",
        slug: "isolatin1",
        high_half: None,
    },
    Charset {
        title: "MacRoman US",
        slug: "macromanus",
        high_half: Some(&MAC_ROMAN_US),
    },
    Charset {
        title: "Windows 437",
        slug: "windows437",
        high_half: Some(&WINDOWS_437),
    },
    Charset {
        title: "Windows 1252",
        slug: "windows1252",
        high_half: Some(&WINDOWS_1252),
    },
];

impl Charset {
    /// Unicode code point a byte value maps to in this encoding.
    pub fn code_point(&self, byte: usize) -> u32 {
        if byte < 128 {
            return byte as u32;
        }
        match self.high_half {
            Some(table) => u32::from(table[byte - 128]),
            None => byte as u32,
        }
    }
}

/// Minimal escaping for text dropped into HTML element content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn create_header(lines: &mut Vec<String>, charset: &Charset) {
    lines.push("<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\"".to_string());
    lines.push("   \"http://www.w3.org/TR/html4/loose.dtd\">".to_string());
    lines.push("<html lang=\"en-US\">".to_string());
    lines.push("<head>".to_string());
    lines.push(format!("<title>{} Unicode table</title>", charset.title));
    lines.push("<meta name=\"Author\" content=\"Rebecca Heineman\">".to_string());
    lines.push(format!(
        "<meta name=\"description\" content=\"{} Unicode table\">",
        charset.title
    ));
    lines.push(
        "<meta name=\"keywords\" content=\"burgerlib, xbox, ps3, ps2, \
         wii, ds, ipod, mac, vista, xp, c, c++, assembly, arm, ppc, intel, \
         amd, nvidia, ati, sony, microsoft, nintendo, sega, playstation, \
         ps4, ps5\">"
            .to_string(),
    );
    lines.push(
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">".to_string(),
    );
    lines.push("</head>".to_string());
}

// Column index row shared by the top and the bottom of the grid.
fn index_row(lines: &mut Vec<String>) {
    lines.push("<tr bgcolor=\"#555555\">".to_string());
    lines.push("<td></td>".to_string());
    for i in 0..16 {
        lines.push(format!("<th><font color=\"white\">{:02X}</font></th>", i));
    }
    lines.push("<td></td>".to_string());
    lines.push("</tr>".to_string());
}

fn create_top(lines: &mut Vec<String>, charset: &Charset) {
    lines.push("<body bgcolor=\"#FFFFFF\">".to_string());
    lines.push(format!(
        "<center><h1>{} Unicode table</h1></center>",
        charset.title
    ));
    lines.push("<center><h3>Generated with <i>burgerbuild</i></h3></center>".to_string());
    lines.push(format!(
        "<table width=\"100%\" border=\"1\" cellspacing=\"0\" cellpadding=\"2\" \
         summary=\"This is the Unicode mapping of {}\">",
        charset.title
    ));
    index_row(lines);
}

/// Generate the HTML for a single table cell.
fn create_entry(lines: &mut Vec<String>, utf32: u32) {
    let hexstring = format!("{:04X}", utf32);
    let (title, text) = match description(utf32) {
        Some(Desc::Graphic(name)) => {
            let glyph = char::from_u32(utf32).map(String::from).unwrap_or_default();
            ((*name).to_string(), glyph)
        }
        Some(Desc::Control(name, abbrev)) => ((*name).to_string(), (*abbrev).to_string()),
        None => {
            log(
                LogLevel::Warn,
                &format!("Code {:#x} is not found", utf32),
            );
            ("UNKNOWN".to_string(), "NULL".to_string())
        }
    };

    let entry = if text.chars().count() == 1 {
        format!(
            "<td align=\"center\" title=\"{}\"><font size=\"+2\">{}</font><br>\
             <font size=\"-2\">{}</font></td>",
            title,
            escape_html(&text),
            hexstring
        )
    } else {
        format!(
            "<td align=\"center\" title=\"{}\">{}<br><font size=\"-2\">{}</font></td>",
            title, text, hexstring
        )
    };
    lines.push(entry);
}

fn create_table(lines: &mut Vec<String>, charset: &Charset) {
    create_top(lines, charset);
    for i in 0..16 {
        if i % 2 == 0 {
            lines.push("<tr>".to_string());
        } else {
            lines.push("<tr bgcolor=\"#dddddd\">".to_string());
        }
        lines.push(format!(
            "<th bgcolor=\"#555555\"><font color=\"white\">{:X}0</font></th>",
            i
        ));
        for j in 0..16 {
            create_entry(lines, charset.code_point(i * 16 + j));
        }
        lines.push(format!(
            "<th bgcolor=\"#555555\"><font color=\"white\">{:X}0</font></th>",
            i
        ));
        lines.push("</tr>".to_string());
    }
    index_row(lines);
}

fn create_footer(lines: &mut Vec<String>) {
    lines.push("</table>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
}

/// Renders the full HTML page for one charset.
pub fn render_charset(charset: &Charset) -> String {
    let mut lines = Vec::new();
    create_header(&mut lines, charset);
    create_table(&mut lines, charset);
    create_footer(&mut lines);
    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// Writes the four charset pages into `temp/charsets`, change-gated and
/// with a UTF-8 BOM for the doc tools.
pub fn generate(ctx: &BuildContext) -> BuildResult<()> {
    let dest_folder = ctx.working_dir.join("temp").join("charsets");
    sync::create_folder_if_needed(&dest_folder)?;
    for charset in CHARSETS {
        let page = render_charset(charset);
        let dest = dest_folder.join(format!("{}.htm", charset.slug));
        sync::save_text_file_if_changed(&dest, &page, true)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_sorted_for_binary_search() {
        for pair in DESCRIPTIONS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "entries out of order at {:#x}", pair[1].0);
        }
    }

    #[test]
    fn capital_a_renders_as_a_glyph() {
        let mut lines = Vec::new();
        create_entry(&mut lines, 0x0041);
        let cell = &lines[0];
        assert!(cell.contains("title=\"LATIN CAPITAL LETTER A\""));
        assert!(cell.contains("<font size=\"+2\">A</font>"));
        assert!(cell.contains("0041"));
    }

    #[test]
    fn nul_renders_as_control_abbreviation() {
        let mut lines = Vec::new();
        create_entry(&mut lines, 0x0000);
        let cell = &lines[0];
        assert!(cell.contains("title=\"NULL\""));
        assert!(cell.contains(">NUL<"));
        // Multi character abbreviation must not use the big glyph font.
        assert!(!cell.contains("<font size=\"+2\">"));
    }

    #[test]
    fn unmapped_code_point_renders_placeholder() {
        assert!(description(0xEEEE).is_none());
        let mut lines = Vec::new();
        create_entry(&mut lines, 0xEEEE);
        assert!(lines[0].contains("title=\"UNKNOWN\""));
    }

    #[test]
    fn markup_glyphs_are_escaped() {
        let mut lines = Vec::new();
        create_entry(&mut lines, u32::from('<'));
        assert!(lines[0].contains("&lt;"));
    }

    #[test]
    fn every_charset_cell_has_a_description() {
        for charset in CHARSETS {
            for byte in 0..256 {
                let code = charset.code_point(byte);
                assert!(
                    description(code).is_some(),
                    "{} byte {:#04x} maps to undescribed {:#06x}",
                    charset.title,
                    byte,
                    code
                );
            }
        }
    }

    #[test]
    fn iso_latin1_high_half_is_identity() {
        let iso = &CHARSETS[0];
        assert_eq!(iso.code_point(0xA9), 0x00A9);
        assert_eq!(iso.code_point(0xFF), 0x00FF);
    }

    #[test]
    fn mac_roman_euro_and_apple() {
        let mac = &CHARSETS[1];
        assert_eq!(mac.code_point(0xDB), 0x20AC);
        assert_eq!(mac.code_point(0xF0), 0xF8FF);
    }

    #[test]
    fn rendered_page_is_a_full_document() {
        let page = render_charset(&CHARSETS[2]);
        assert!(page.starts_with("<!DOCTYPE"));
        assert!(page.contains("Windows 437 Unicode table"));
        assert!(page.trim_end().ends_with("</html>"));
        // 16 data rows plus the two index rows.
        assert_eq!(page.matches("</tr>").count(), 18);
    }
}
