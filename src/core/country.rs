//! # Country Catalog
//!
//! Every country the quiz can ask about, with a display name and a flag
//! description simple enough to draw with coloured terminal cells.
//!
//! Flags are described in framework-independent terms (`Rgb`, proportions in
//! `0.0..1.0`). The TUI turns them into ratatui colours; nothing here knows
//! about terminals.

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One band of a striped flag. Weights are relative to the other bands.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub color: Rgb,
    pub weight: u8,
}

/// Simplified flag geometry.
#[derive(Debug, Clone, Copy)]
pub enum FlagPattern {
    /// Bands stacked top to bottom.
    HorizontalBands(&'static [Band]),
    /// Bands laid out left to right.
    VerticalBands(&'static [Band]),
    /// Alternating stripes with a rectangular canton in the top-left corner.
    Canton {
        stripes: &'static [Rgb],
        stripe_count: u8,
        canton: Rgb,
    },
    /// A bordered cross on a plain field.
    Cross { field: Rgb, cross: Rgb, border: Rgb },
}

impl FlagPattern {
    /// Colour at the normalized position `(x, y)`, both in `0.0..1.0`.
    /// Out-of-range coordinates are clamped.
    pub fn color_at(&self, x: f32, y: f32) -> Rgb {
        let x = x.clamp(0.0, 0.999);
        let y = y.clamp(0.0, 0.999);
        match self {
            FlagPattern::HorizontalBands(bands) => band_at(bands, y),
            FlagPattern::VerticalBands(bands) => band_at(bands, x),
            FlagPattern::Canton {
                stripes,
                stripe_count,
                canton,
            } => {
                let count = (*stripe_count).max(1) as f32;
                let stripe = (y * count) as usize;
                // Canton spans the top seven of thirteen stripes on the US flag
                let canton_height = ((count / 2.0).ceil()) / count;
                if x < 0.4 && y < canton_height {
                    *canton
                } else {
                    stripes[stripe % stripes.len()]
                }
            }
            FlagPattern::Cross {
                field,
                cross,
                border,
            } => {
                let dx = (x - 0.5).abs();
                let dy = (y - 0.5).abs();
                if dx < 0.05 || dy < 0.1 {
                    *cross
                } else if dx < 0.085 || dy < 0.17 {
                    *border
                } else {
                    *field
                }
            }
        }
    }
}

fn band_at(bands: &[Band], t: f32) -> Rgb {
    let total: u32 = bands.iter().map(|b| b.weight as u32).sum();
    let target = t * total as f32;
    let mut acc = 0.0;
    for b in bands {
        acc += b.weight as f32;
        if target < acc {
            return b.color;
        }
    }
    bands.last().map(|b| b.color).unwrap_or(Rgb(0, 0, 0))
}

#[derive(Debug)]
pub struct Country {
    /// Lowercase identifier used in pools and config files.
    pub id: &'static str,
    pub name: &'static str,
    pub flag: FlagPattern,
}

impl Country {
    /// Upper-cased name, as shown in prompts and feedback.
    pub fn shouted_name(&self) -> String {
        self.name.to_uppercase()
    }
}

const WHITE: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);

pub static CATALOG: &[Country] = &[
    Country {
        id: "austria",
        name: "Austria",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(200, 16, 46),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(200, 16, 46),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "belgium",
        name: "Belgium",
        flag: FlagPattern::VerticalBands(&[
            Band {
                color: BLACK,
                weight: 1,
            },
            Band {
                color: Rgb(253, 218, 36),
                weight: 1,
            },
            Band {
                color: Rgb(239, 51, 64),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "estonia",
        name: "Estonia",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(0, 114, 206),
                weight: 1,
            },
            Band {
                color: BLACK,
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
        ]),
    },
    Country {
        id: "france",
        name: "France",
        flag: FlagPattern::VerticalBands(&[
            Band {
                color: Rgb(0, 35, 149),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(237, 41, 57),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "germany",
        name: "Germany",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: BLACK,
                weight: 1,
            },
            Band {
                color: Rgb(221, 0, 0),
                weight: 1,
            },
            Band {
                color: Rgb(255, 206, 0),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "hungary",
        name: "Hungary",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(206, 41, 57),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(71, 112, 80),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "ireland",
        name: "Ireland",
        flag: FlagPattern::VerticalBands(&[
            Band {
                color: Rgb(22, 155, 98),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(255, 136, 62),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "italy",
        name: "Italy",
        flag: FlagPattern::VerticalBands(&[
            Band {
                color: Rgb(0, 146, 70),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(206, 43, 55),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "lithuania",
        name: "Lithuania",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(253, 185, 19),
                weight: 1,
            },
            Band {
                color: Rgb(0, 106, 68),
                weight: 1,
            },
            Band {
                color: Rgb(193, 39, 45),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "monaco",
        name: "Monaco",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(206, 17, 38),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
        ]),
    },
    Country {
        id: "netherlands",
        name: "Netherlands",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(174, 28, 40),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(33, 70, 139),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "nigeria",
        name: "Nigeria",
        flag: FlagPattern::VerticalBands(&[
            Band {
                color: Rgb(0, 135, 81),
                weight: 1,
            },
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(0, 135, 81),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "poland",
        name: "Poland",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(220, 20, 60),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "romania",
        name: "Romania",
        flag: FlagPattern::VerticalBands(&[
            Band {
                color: Rgb(0, 43, 127),
                weight: 1,
            },
            Band {
                color: Rgb(252, 209, 22),
                weight: 1,
            },
            Band {
                color: Rgb(206, 17, 38),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "russia",
        name: "Russia",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: WHITE,
                weight: 1,
            },
            Band {
                color: Rgb(0, 57, 166),
                weight: 1,
            },
            Band {
                color: Rgb(213, 43, 30),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "spain",
        name: "Spain",
        flag: FlagPattern::HorizontalBands(&[
            Band {
                color: Rgb(170, 21, 27),
                weight: 1,
            },
            Band {
                color: Rgb(241, 191, 0),
                weight: 2,
            },
            Band {
                color: Rgb(170, 21, 27),
                weight: 1,
            },
        ]),
    },
    Country {
        id: "uk",
        name: "United Kingdom",
        flag: FlagPattern::Cross {
            field: Rgb(1, 33, 105),
            cross: Rgb(200, 16, 46),
            border: WHITE,
        },
    },
    Country {
        id: "us",
        name: "United States",
        flag: FlagPattern::Canton {
            stripes: &[Rgb(178, 34, 52), WHITE],
            stripe_count: 13,
            canton: Rgb(60, 59, 110),
        },
    },
];

/// Identifiers used when no custom pool is configured.
pub const DEFAULT_POOL: &[&str] = &[
    "estonia", "france", "germany", "ireland", "italy", "monaco", "nigeria", "poland", "russia",
    "spain", "uk", "us",
];

/// Case-insensitive catalog lookup.
pub fn lookup(id: &str) -> Option<&'static Country> {
    let id = id.trim();
    CATALOG.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// Name to show for an identifier. Unknown ids are shown as-is, upper-cased.
pub fn shouted_name(id: &str) -> String {
    lookup(id)
        .map(Country::shouted_name)
        .unwrap_or_else(|| id.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_is_in_catalog() {
        for id in DEFAULT_POOL {
            assert!(lookup(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = CATALOG.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("France").map(|c| c.id), Some("france"));
        assert_eq!(lookup(" UK ").map(|c| c.id), Some("uk"));
        assert!(lookup("atlantis").is_none());
    }

    #[test]
    fn test_shouted_name() {
        assert_eq!(shouted_name("us"), "UNITED STATES");
        assert_eq!(shouted_name("atlantis"), "ATLANTIS");
    }

    #[test]
    fn test_vertical_tricolour() {
        let france = lookup("france").unwrap();
        assert_eq!(france.flag.color_at(0.1, 0.5), Rgb(0, 35, 149));
        assert_eq!(france.flag.color_at(0.5, 0.5), WHITE);
        assert_eq!(france.flag.color_at(0.9, 0.5), Rgb(237, 41, 57));
    }

    #[test]
    fn test_weighted_bands() {
        let spain = lookup("spain").unwrap();
        // Yellow band covers the middle half
        assert_eq!(spain.flag.color_at(0.5, 0.3), Rgb(241, 191, 0));
        assert_eq!(spain.flag.color_at(0.5, 0.7), Rgb(241, 191, 0));
        assert_eq!(spain.flag.color_at(0.5, 0.1), Rgb(170, 21, 27));
        assert_eq!(spain.flag.color_at(0.5, 0.9), Rgb(170, 21, 27));
    }

    #[test]
    fn test_canton_and_stripes() {
        let us = lookup("us").unwrap();
        assert_eq!(us.flag.color_at(0.1, 0.1), Rgb(60, 59, 110));
        assert_eq!(us.flag.color_at(0.9, 0.0), Rgb(178, 34, 52));
        assert_eq!(us.flag.color_at(0.9, 0.99), Rgb(178, 34, 52));
        assert_eq!(us.flag.color_at(0.1, 0.99), Rgb(178, 34, 52));
    }

    #[test]
    fn test_cross() {
        let uk = lookup("uk").unwrap();
        assert_eq!(uk.flag.color_at(0.5, 0.5), Rgb(200, 16, 46));
        assert_eq!(uk.flag.color_at(0.05, 0.05), Rgb(1, 33, 105));
    }

    #[test]
    fn test_color_at_clamps() {
        let poland = lookup("poland").unwrap();
        assert_eq!(poland.flag.color_at(-1.0, -1.0), WHITE);
        assert_eq!(poland.flag.color_at(2.0, 2.0), Rgb(220, 20, 60));
    }
}
