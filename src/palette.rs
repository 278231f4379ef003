//! Palettes of named colors and the nearest color search over them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{math::distance, Component, Hex, Rgb};

/// The RAL Classic colors, in ascending code order.
#[rustfmt::skip]
const RAL_CLASSIC: &[(u32, &str)] = &[
    (1000, "C5BB8A"), (1001, "C6B286"), (1002, "C7AE72"), (1003, "E6B019"), (1004, "D2A40E"),
    (1005, "BC9611"), (1006, "CF9804"), (1007, "D49300"), (1011, "A38454"), (1012, "CFB539"),
    (1013, "DFDBC7"), (1014, "D4C79C"), (1015, "DED3B6"), (1016, "E8E253"), (1017, "E4AF56"),
    (1018, "EBD346"), (1019, "9C917B"), (1020, "999167"), (1021, "E5C000"), (1023, "E6BE05"),
    (1024, "AD9451"), (1026, "FFFF00"), (1027, "998420"), (1028, "F2A500"), (1032, "CFA81E"),
    (1033, "E4A02D"), (1034, "D9A156"), (1035, "898271"), (1036, "746341"), (1037, "DB9A17"),
    (2000, "C7750F"), (2001, "A74D23"), (2002, "AC3721"), (2003, "E17C30"), (2004, "CC5608"),
    (2005, "FF4612"), (2007, "FFAD19"), (2008, "D66C21"), (2009, "C9560D"), (2010, "BC602D"),
    (2011, "CF7421"), (2012, "C2674F"), (2013, "824128"), (2017, "DC5B00"), (3000, "962A27"),
    (3001, "8F1E24"), (3002, "8D1F24"), (3003, "7C0D24"), (3004, "651927"), (3005, "561E27"),
    (3007, "3D2326"), (3009, "643730"), (3011, "6E2124"), (3012, "B7856E"), (3013, "8A2F28"),
    (3014, "BC6F72"), (3015, "CC9EA4"), (3016, "963D2F"), (3017, "B9535B"), (3018, "B63C49"),
    (3020, "AB1519"), (3022, "BE6954"), (3024, "EE1729"), (3026, "F71027"), (3027, "9E1B3C"),
    (3028, "B92726"), (3031, "973238"), (3032, "661925"), (3033, "94352D"), (4001, "7C5B80"),
    (4002, "823A4B"), (4003, "B65A88"), (4004, "5F1837"), (4005, "746395"), (4006, "852E6F"),
    (4007, "44263C"), (4008, "7C477D"), (4009, "95838F"), (4010, "AC3B71"), (4011, "685C80"),
    (4012, "67657A"), (5000, "35496B"), (5001, "294763"), (5002, "193278"), (5003, "203151"),
    (5004, "1E222C"), (5005, "134A85"), (5007, "466589"), (5008, "2F3A44"), (5009, "365875"),
    (5010, "0E457A"), (5011, "222C3E"), (5012, "457FB3"), (5013, "212F51"), (5014, "667691"),
    (5015, "3172AD"), (5017, "0F518A"), (5018, "47848D"), (5019, "265682"), (5020, "113E4D"),
    (5021, "216D76"), (5022, "282C58"), (5023, "4D648A"), (5024, "6C8DAA"), (5025, "3C6379"),
    (5026, "1B2B4D"), (6000, "4A7363"), (6001, "40693A"), (6002, "3B5B2F"), (6003, "4F553E"),
    (6004, "214245"), (6005, "234235"), (6006, "3C3D32"), (6007, "2E3526"), (6008, "333327"),
    (6009, "2A372C"), (6010, "4E6E39"), (6011, "6A7C5B"), (6012, "2F3B39"), (6013, "777659"),
    (6014, "454339"), (6015, "3C3F38"), (6016, "256753"), (6017, "5C8144"), (6018, "689A45"),
    (6019, "B8CFAD"), (6020, "3B4634"), (6021, "899B79"), (6022, "3B382E"), (6024, "3A8258"),
    (6025, "5D703E"), (6026, "0D5951"), (6027, "88B5B3"), (6028, "3D5547"), (6029, "226C45"),
    (6032, "417E57"), (6033, "568480"), (6034, "86A9AD"), (6035, "2E4F31"), (6036, "27514A"),
    (6037, "3F8C3D"), (6038, "20A339"), (6039, "ABC251"), (7000, "7B858D"), (7001, "8B949B"),
    (7002, "7D7965"), (7003, "76776A"), (7004, "969799"), (7005, "696D6B"), (7006, "716C60"),
    (7008, "6C6040"), (7009, "5B6058"), (7010, "575B57"), (7011, "535A5E"), (7012, "595E60"),
    (7013, "545146"), (7015, "51535A"), (7016, "3B4044"), (7021, "323537"), (7022, "4C4C47"),
    (7023, "7D7F76"), (7024, "45494E"), (7026, "394345"), (7030, "8C8C83"), (7031, "5D676D"),
    (7032, "B1B1A1"), (7033, "7C8273"), (7034, "8C8870"), (7035, "C2C6C3"), (7036, "949292"),
    (7037, "797B7B"), (7038, "ADB0A9"), (7039, "68675F"), (7040, "969CA1"), (7042, "8C9190"),
    (7043, "4F5352"), (7044, "B3B2A9"), (7045, "8C9094"), (7046, "7C8287"), (7047, "C5C5C5"),
    (7048, "7A7871"), (8000, "816D44"), (8001, "8F6833"), (8002, "704F40"), (8003, "74502F"),
    (8004, "814D37"), (8007, "67492F"), (8008, "694F2B"), (8011, "533A29"), (8012, "5C3128"),
    (8014, "453729"), (8015, "57332B"), (8016, "483026"), (8017, "42332E"), (8019, "3B3736"),
    (8022, "201F20"), (8023, "965D33"), (8024, "6F543C"), (8025, "6E5B4B"), (8028, "4C3E30"),
    (8029, "764537"), (9001, "E5E1D4"), (9002, "D4D5CD"), (9003, "EBECEA"), (9004, "2F3133"),
    (9005, "131516"), (9006, "9A9D9D"), (9007, "828280"), (9010, "EFEEE5"), (9011, "25282A"),
    (9012, "F2F1E1"), (9016, "EFF0EB"), (9017, "262625"), (9018, "C6CBC6"), (9022, "818382"),
    (9023, "767779"),
];

static RAL: Lazy<Palette> = Lazy::new(|| {
    Palette::from_entries(RAL_CLASSIC.iter().filter_map(|&(code, hex)| {
        match Hex::new(hex) {
            Ok(hex) => Some((code, hex)),
            Err(err) => {
                tracing::warn!(code, %err, "skipping malformed palette entry");
                None
            }
        }
    }))
});

/// One color of a [`Palette`].
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    code: u32,
    hex: Hex,
    rgb: Rgb,
}

impl Entry {
    /// The code that identifies the color within its palette.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// The color as it is written in the palette.
    pub fn hex(&self) -> &Hex {
        &self.hex
    }

    /// The color decoded to RGB.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

/// An ordered table of colors keyed by an integer code.
///
/// Iteration follows the order the entries were given in, which is also the
/// order that breaks ties in [`Palette::closest`].
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Vec<Entry>,
    index: HashMap<u32, usize>,
}

impl Palette {
    /// Build a palette from `(code, color)` pairs. When a code appears more
    /// than once, lookups resolve to its first entry.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, Hex)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(code, hex)| Entry {
                code,
                rgb: hex.to_rgb(),
                hex,
            })
            .collect::<Vec<_>>();

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.code).or_insert(i);
        }

        Self { entries, index }
    }

    /// The RAL Classic palette. It is built the first time it is needed and
    /// shared for the rest of the process.
    pub fn ral() -> &'static Palette {
        &RAL
    }

    /// Number of entries in the palette.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Find the entry with the given code.
    pub fn lookup(&self, code: u32) -> Option<&Entry> {
        self.index.get(&code).map(|&i| &self.entries[i])
    }

    /// Find the entry closest to `target` by Euclidean distance over the RGB
    /// channels. Of entries at the same distance the first one wins. Returns
    /// `None` if the palette is empty.
    pub fn closest(&self, target: &Rgb) -> Option<&Entry> {
        let mut closest: Option<(&Entry, Component)> = None;

        for entry in &self.entries {
            let dist = distance(target, &entry.rgb);
            if closest.map_or(true, |(_, min)| dist < min) {
                closest = Some((entry, dist));
            }
        }

        if let Some((entry, dist)) = closest {
            tracing::trace!(code = entry.code, distance = dist as f64, %target, "closest palette entry");
        }

        closest.map(|(entry, _)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn build(entries: &[(u32, &str)]) -> Palette {
        Palette::from_entries(
            entries
                .iter()
                .map(|&(code, hex)| (code, Hex::new(hex).unwrap())),
        )
    }

    #[test]
    fn ral_table_is_complete_and_ordered() {
        let ral = Palette::ral();
        assert_eq!(ral.len(), RAL_CLASSIC.len());
        assert_eq!(ral.len(), 216);
        assert!(ral
            .iter()
            .zip(ral.iter().skip(1))
            .all(|(a, b)| a.code() < b.code()));
    }

    #[test]
    fn ral_table_is_shared() {
        assert!(std::ptr::eq(Palette::ral(), Palette::ral()));
    }

    #[test]
    fn lookup() {
        let ral = Palette::ral();
        let entry = ral.lookup(1000).unwrap();
        assert_eq!(entry.code(), 1000);
        assert_eq!(entry.hex().to_string(), "#C5BB8A");
        assert_eq!(entry.rgb(), Rgb::new(197, 187, 138));

        // Stored without the stray semicolon of the source data.
        assert_eq!(ral.lookup(1027).unwrap().hex().digits(), "998420");

        assert!(ral.lookup(1010).is_none());
        assert!(ral.lookup(0).is_none());
    }

    #[test]
    fn closest() {
        let ral = Palette::ral();
        #[rustfmt::skip]
        const TESTS: &[(&str, u32, &str)] = &[
            ("#333333", 9004, "2F3133"),
            ("#666666", 7039, "68675F"),
            ("#999999", 7004, "969799"),
            ("#CCCCCC", 9018, "C6CBC6"),
            ("#FFFFFF", 9016, "EFF0EB"),
            ("#000000", 9005, "131516"),
            ("#ff0000", 3026, "F71027"),
        ];

        for &(target, code, hex) in TESTS {
            let target = Hex::new(target).unwrap().to_rgb();
            let entry = ral.closest(&target).unwrap();
            assert_eq!(entry.code(), code);
            assert_eq!(entry.hex().digits(), hex);
        }
    }

    #[test]
    fn exact_match_is_closest() {
        let ral = Palette::ral();
        for entry in ral.iter() {
            let closest = ral.closest(&entry.rgb()).unwrap();
            assert_component_eq!(distance(&closest.rgb(), &entry.rgb()), 0.0);
        }
    }

    #[test]
    fn empty_palette_has_no_closest() {
        let empty = Palette::from_entries(std::iter::empty());
        assert!(empty.is_empty());
        assert!(empty.closest(&Rgb::new(0, 0, 0)).is_none());
        assert!(empty.lookup(1000).is_none());
    }

    #[test]
    fn ties_go_to_the_first_entry() {
        // Both are 10 away from the target.
        let palette = build(&[(2, "0a0000"), (1, "000a00"), (3, "ffffff")]);
        let closest = palette.closest(&Rgb::new(0, 0, 0)).unwrap();
        assert_eq!(closest.code(), 2);

        let palette = build(&[(1, "000a00"), (2, "0a0000")]);
        assert_eq!(palette.closest(&Rgb::new(0, 0, 0)).unwrap().code(), 1);
    }

    #[test]
    fn duplicate_codes_resolve_to_the_first_entry() {
        let palette = build(&[(7, "111111"), (7, "222222")]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.lookup(7).unwrap().hex().digits(), "111111");
    }
}
