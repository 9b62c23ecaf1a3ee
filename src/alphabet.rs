// Copyright (C) 2020-2024 Andy Kurnia.

// tile 0 is the joker. the other tiles are letters, lowercase labels.
pub const JOKER: u8 = 0;

pub struct Tile<'a> {
    label: &'a str,
    freq: u8,
    score: i8,
    is_vowel: bool,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    // total number of tiles in a full bag.
    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> Option<&'a str> {
        if idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(idx).score
    }

    #[inline(always)]
    pub fn is_vowel(&self, idx: u8) -> bool {
        self.get(idx).is_vowel
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    // letters only, joker excluded.
    pub fn vowels(&self) -> impl Iterator<Item = u8> + '_ {
        (1..self.len()).filter(move |&tile| self.is_vowel(tile))
    }

    pub fn consonants(&self) -> impl Iterator<Item = u8> + '_ {
        (1..self.len()).filter(move |&tile| !self.is_vowel(tile))
    }

    // case-insensitive.
    pub fn tile_of(&self, c: char) -> Option<u8> {
        let mut buf = [0u8; 4];
        (0..self.len()).find(|&tile| {
            c.to_lowercase()
                .all(|lc| self.get(tile).label == lc.encode_utf8(&mut buf))
        })
    }

    // None if any char is not in the alphabet.
    pub fn parse_word(&self, s: &str) -> Option<Vec<u8>> {
        s.chars().map(|c| self.tile_of(c)).collect()
    }

    pub fn fmt_tiles(&self, tiles: &[u8]) -> String {
        let mut s = String::with_capacity(tiles.len());
        for &tile in tiles {
            s.push_str(self.label(tile).unwrap_or("?"));
        }
        s
    }
}

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(StaticAlphabet {
        tiles: &[
            Tile {
                label: "*",
                freq: 2,
                score: 0,
                is_vowel: false,
            },
            Tile {
                label: "a",
                freq: 9,
                score: 1,
                is_vowel: true,
            },
            Tile {
                label: "b",
                freq: 2,
                score: 3,
                is_vowel: false,
            },
            Tile {
                label: "c",
                freq: 2,
                score: 3,
                is_vowel: false,
            },
            Tile {
                label: "d",
                freq: 4,
                score: 2,
                is_vowel: false,
            },
            Tile {
                label: "e",
                freq: 12,
                score: 1,
                is_vowel: true,
            },
            Tile {
                label: "f",
                freq: 2,
                score: 4,
                is_vowel: false,
            },
            Tile {
                label: "g",
                freq: 3,
                score: 2,
                is_vowel: false,
            },
            Tile {
                label: "h",
                freq: 2,
                score: 4,
                is_vowel: false,
            },
            Tile {
                label: "i",
                freq: 9,
                score: 1,
                is_vowel: true,
            },
            Tile {
                label: "j",
                freq: 1,
                score: 8,
                is_vowel: false,
            },
            Tile {
                label: "k",
                freq: 1,
                score: 5,
                is_vowel: false,
            },
            Tile {
                label: "l",
                freq: 4,
                score: 1,
                is_vowel: false,
            },
            Tile {
                label: "m",
                freq: 2,
                score: 3,
                is_vowel: false,
            },
            Tile {
                label: "n",
                freq: 6,
                score: 1,
                is_vowel: false,
            },
            Tile {
                label: "o",
                freq: 8,
                score: 1,
                is_vowel: true,
            },
            Tile {
                label: "p",
                freq: 2,
                score: 3,
                is_vowel: false,
            },
            Tile {
                label: "q",
                freq: 1,
                score: 10,
                is_vowel: false,
            },
            Tile {
                label: "r",
                freq: 6,
                score: 1,
                is_vowel: false,
            },
            Tile {
                label: "s",
                freq: 4,
                score: 1,
                is_vowel: false,
            },
            Tile {
                label: "t",
                freq: 6,
                score: 1,
                is_vowel: false,
            },
            Tile {
                label: "u",
                freq: 4,
                score: 1,
                is_vowel: true,
            },
            Tile {
                label: "v",
                freq: 2,
                score: 4,
                is_vowel: false,
            },
            Tile {
                label: "w",
                freq: 2,
                score: 4,
                is_vowel: false,
            },
            Tile {
                label: "x",
                freq: 1,
                score: 8,
                is_vowel: false,
            },
            Tile {
                label: "y",
                freq: 2,
                score: 4,
                is_vowel: false,
            },
            Tile {
                label: "z",
                freq: 1,
                score: 10,
                is_vowel: false,
            },
        ],
        num_tiles: 100,
    })
}
