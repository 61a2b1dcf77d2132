//! Surah catalogue for Quran browsing
//!
//! Transliterated names, ayah counts and place of revelation for the 114
//! surahs, in mushaf order.

use serde::Serialize;

/// Number of surahs
pub const SURAH_COUNT: u16 = 114;

/// Where a surah was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Revelation {
    /// Revealed in Mecca
    Meccan,
    /// Revealed in Medina
    Medinan,
}

/// One surah of the Quran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Surah {
    /// Position in the mushaf (1-114)
    pub number: u16,
    /// Transliterated name
    pub name: &'static str,
    /// Number of ayahs
    pub ayah_count: u16,
    /// Place of revelation
    pub revelation: Revelation,
}

use Revelation::{Meccan, Medinan};

const SURAHS: [(&str, u16, Revelation); SURAH_COUNT as usize] = [
    ("Al-Fatihah", 7, Meccan),
    ("Al-Baqarah", 286, Medinan),
    ("Al-Imran", 200, Medinan),
    ("An-Nisa", 176, Medinan),
    ("Al-Maidah", 120, Medinan),
    ("Al-Anam", 165, Meccan),
    ("Al-Araf", 206, Meccan),
    ("Al-Anfal", 75, Medinan),
    ("At-Tawbah", 129, Medinan),
    ("Yunus", 109, Meccan),
    ("Hud", 123, Meccan),
    ("Yusuf", 111, Meccan),
    ("Ar-Rad", 43, Medinan),
    ("Ibrahim", 52, Meccan),
    ("Al-Hijr", 99, Meccan),
    ("An-Nahl", 128, Meccan),
    ("Al-Isra", 111, Meccan),
    ("Al-Kahf", 110, Meccan),
    ("Maryam", 98, Meccan),
    ("Ta-Ha", 135, Meccan),
    ("Al-Anbiya", 112, Meccan),
    ("Al-Hajj", 78, Medinan),
    ("Al-Muminun", 118, Meccan),
    ("An-Nur", 64, Medinan),
    ("Al-Furqan", 77, Meccan),
    ("Ash-Shuara", 227, Meccan),
    ("An-Naml", 93, Meccan),
    ("Al-Qasas", 88, Meccan),
    ("Al-Ankabut", 69, Meccan),
    ("Ar-Rum", 60, Meccan),
    ("Luqman", 34, Meccan),
    ("As-Sajdah", 30, Meccan),
    ("Al-Ahzab", 73, Medinan),
    ("Saba", 54, Meccan),
    ("Fatir", 45, Meccan),
    ("Ya-Sin", 83, Meccan),
    ("As-Saffat", 182, Meccan),
    ("Sad", 88, Meccan),
    ("Az-Zumar", 75, Meccan),
    ("Ghafir", 85, Meccan),
    ("Fussilat", 54, Meccan),
    ("Ash-Shura", 53, Meccan),
    ("Az-Zukhruf", 89, Meccan),
    ("Ad-Dukhan", 59, Meccan),
    ("Al-Jathiyah", 37, Meccan),
    ("Al-Ahqaf", 35, Meccan),
    ("Muhammad", 38, Medinan),
    ("Al-Fath", 29, Medinan),
    ("Al-Hujurat", 18, Medinan),
    ("Qaf", 45, Meccan),
    ("Adh-Dhariyat", 60, Meccan),
    ("At-Tur", 49, Meccan),
    ("An-Najm", 62, Meccan),
    ("Al-Qamar", 55, Meccan),
    ("Ar-Rahman", 78, Medinan),
    ("Al-Waqiah", 96, Meccan),
    ("Al-Hadid", 29, Medinan),
    ("Al-Mujadila", 22, Medinan),
    ("Al-Hashr", 24, Medinan),
    ("Al-Mumtahanah", 13, Medinan),
    ("As-Saff", 14, Medinan),
    ("Al-Jumuah", 11, Medinan),
    ("Al-Munafiqun", 11, Medinan),
    ("At-Taghabun", 18, Medinan),
    ("At-Talaq", 12, Medinan),
    ("At-Tahrim", 12, Medinan),
    ("Al-Mulk", 30, Meccan),
    ("Al-Qalam", 52, Meccan),
    ("Al-Haqqah", 52, Meccan),
    ("Al-Maarij", 44, Meccan),
    ("Nuh", 28, Meccan),
    ("Al-Jinn", 28, Meccan),
    ("Al-Muzzammil", 20, Meccan),
    ("Al-Muddaththir", 56, Meccan),
    ("Al-Qiyamah", 40, Meccan),
    ("Al-Insan", 31, Medinan),
    ("Al-Mursalat", 50, Meccan),
    ("An-Naba", 40, Meccan),
    ("An-Naziat", 46, Meccan),
    ("Abasa", 42, Meccan),
    ("At-Takwir", 29, Meccan),
    ("Al-Infitar", 19, Meccan),
    ("Al-Mutaffifin", 36, Meccan),
    ("Al-Inshiqaq", 25, Meccan),
    ("Al-Buruj", 22, Meccan),
    ("At-Tariq", 17, Meccan),
    ("Al-Ala", 19, Meccan),
    ("Al-Ghashiyah", 26, Meccan),
    ("Al-Fajr", 30, Meccan),
    ("Al-Balad", 20, Meccan),
    ("Ash-Shams", 15, Meccan),
    ("Al-Layl", 21, Meccan),
    ("Ad-Duha", 11, Meccan),
    ("Ash-Sharh", 8, Meccan),
    ("At-Tin", 8, Meccan),
    ("Al-Alaq", 19, Meccan),
    ("Al-Qadr", 5, Meccan),
    ("Al-Bayyinah", 8, Medinan),
    ("Az-Zalzalah", 8, Medinan),
    ("Al-Adiyat", 11, Meccan),
    ("Al-Qariah", 11, Meccan),
    ("At-Takathur", 8, Meccan),
    ("Al-Asr", 3, Meccan),
    ("Al-Humazah", 9, Meccan),
    ("Al-Fil", 5, Meccan),
    ("Quraysh", 4, Meccan),
    ("Al-Maun", 7, Meccan),
    ("Al-Kawthar", 3, Meccan),
    ("Al-Kafirun", 6, Meccan),
    ("An-Nasr", 3, Medinan),
    ("Al-Masad", 5, Meccan),
    ("Al-Ikhlas", 4, Meccan),
    ("Al-Falaq", 5, Meccan),
    ("An-Nas", 6, Meccan),
];

/// Look up a surah by number
pub fn surah(number: u16) -> Option<Surah> {
    let index = usize::from(number.checked_sub(1)?);
    SURAHS
        .get(index)
        .map(|&(name, ayah_count, revelation)| Surah {
            number,
            name,
            ayah_count,
            revelation,
        })
}

/// All surahs in order
pub fn surahs() -> impl Iterator<Item = Surah> {
    (1..=SURAH_COUNT).filter_map(surah)
}

/// Total number of ayahs
pub fn total_ayahs() -> u32 {
    SURAHS.iter().map(|&(_, count, _)| u32::from(count)).sum()
}

/// Search by number or by name
///
/// Names match case-insensitively, ignoring hyphens, apostrophes and spaces,
/// so "al kahf" and "alkahf" both find Al-Kahf. An empty query returns every
/// surah.
pub fn search(query: &str) -> Vec<Surah> {
    let query = query.trim();
    if query.is_empty() {
        return surahs().collect();
    }
    if let Ok(number) = query.parse::<u16>() {
        return surah(number).into_iter().collect();
    }

    let needle = normalize(query);
    surahs().filter(|s| normalize(s.name).contains(&needle)).collect()
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
