//! Ingredient taxonomy.
//!
//! Every ingredient belongs to exactly one [`Category`]. Categories form a
//! shallow tree through [`Category::parent`]; behavior that depends on the kind
//! of drink (whether it carries alcohol, whether it can be poured, which
//! portions it is served in) is looked up on the root of that tree.

use std::fmt;

/// A serving size for a pourable category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Portion {
    /// Name of the serving ("pint", "shot", ...).
    pub name: &'static str,
    /// Volume in fluid ounces.
    pub ounces: f64,
}

/// What a category of ingredient can do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capabilities {
    /// Whether ingredients in this category carry an alcohol percentage.
    pub has_abv: bool,
    /// Whether ingredients in this category are poured by volume.
    pub pourable: bool,
    /// Serving sizes, smallest first. Empty for non-pourable categories.
    pub portions: &'static [Portion],
}

const BEER_PORTIONS: &[Portion] = &[
    Portion {
        name: "half pint",
        ounces: 8.0,
    },
    Portion {
        name: "pint",
        ounces: 16.0,
    },
];

const WINE_PORTIONS: &[Portion] = &[
    Portion {
        name: "glass",
        ounces: 5.0,
    },
    Portion {
        name: "bottle",
        ounces: 25.4,
    },
];

const SPIRIT_PORTIONS: &[Portion] = &[
    Portion {
        name: "shot",
        ounces: 1.5,
    },
    Portion {
        name: "double",
        ounces: 3.0,
    },
];

const MIXER_PORTIONS: &[Portion] = &[
    Portion {
        name: "splash",
        ounces: 1.0,
    },
    Portion {
        name: "pour",
        ounces: 4.0,
    },
];

/// The closed set of ingredient categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Beer of any style.
    Beer,
    /// Top-fermented beer.
    Ale,
    /// Bottom-fermented beer.
    Lager,
    /// Dark ale brewed with roasted barley.
    Stout,
    /// Dark ale, lighter than stout.
    Porter,
    /// Pale top-fermented beer from Cologne.
    Kolsch,
    /// Wine of any color.
    Wine,
    /// Red wine.
    RedWine,
    /// White wine.
    WhiteWine,
    /// Distilled liquor.
    Spirit,
    /// Whiskey.
    Whiskey,
    /// Vodka.
    Vodka,
    /// Gin.
    Gin,
    /// Rum.
    Rum,
    /// Tequila.
    Tequila,
    /// Sweetened, flavored spirit.
    Liqueur,
    /// Non-alcoholic drink component.
    Mixer,
    /// Juice.
    Juice,
    /// Carbonated mixer.
    Soda,
    /// Fruit, herbs, and the like; never poured.
    Garnish,
}

impl Category {
    /// Every category, roots before their children.
    pub const ALL: [Category; 20] = [
        Category::Beer,
        Category::Ale,
        Category::Lager,
        Category::Stout,
        Category::Porter,
        Category::Kolsch,
        Category::Wine,
        Category::RedWine,
        Category::WhiteWine,
        Category::Spirit,
        Category::Whiskey,
        Category::Vodka,
        Category::Gin,
        Category::Rum,
        Category::Tequila,
        Category::Liqueur,
        Category::Mixer,
        Category::Juice,
        Category::Soda,
        Category::Garnish,
    ];

    /// Human-readable singular name, as printed on menus.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beer => "Beer",
            Self::Ale => "Ale",
            Self::Lager => "Lager",
            Self::Stout => "Stout",
            Self::Porter => "Porter",
            Self::Kolsch => "Kölsch",
            Self::Wine => "Wine",
            Self::RedWine => "Red Wine",
            Self::WhiteWine => "White Wine",
            Self::Spirit => "Spirit",
            Self::Whiskey => "Whiskey",
            Self::Vodka => "Vodka",
            Self::Gin => "Gin",
            Self::Rum => "Rum",
            Self::Tequila => "Tequila",
            Self::Liqueur => "Liqueur",
            Self::Mixer => "Mixer",
            Self::Juice => "Juice",
            Self::Soda => "Soda",
            Self::Garnish => "Garnish",
        }
    }

    /// The category this one refines, if any.
    #[must_use]
    pub const fn parent(self) -> Option<Category> {
        match self {
            Self::Ale | Self::Lager => Some(Self::Beer),
            Self::Stout | Self::Porter | Self::Kolsch => Some(Self::Ale),
            Self::RedWine | Self::WhiteWine => Some(Self::Wine),
            Self::Whiskey
            | Self::Vodka
            | Self::Gin
            | Self::Rum
            | Self::Tequila
            | Self::Liqueur => Some(Self::Spirit),
            Self::Juice | Self::Soda => Some(Self::Mixer),
            Self::Beer | Self::Wine | Self::Spirit | Self::Mixer | Self::Garnish => None,
        }
    }

    /// The top-level category this one descends from (itself for roots).
    #[must_use]
    pub fn root(self) -> Category {
        let mut current = self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Iterates from this category up through its ancestors.
    pub fn lineage(self) -> impl Iterator<Item = Category> {
        std::iter::successors(Some(self), |c| c.parent())
    }

    /// Returns true if this category is `other` or descends from it.
    #[must_use]
    pub fn is_a(self, other: Category) -> bool {
        self.lineage().any(|c| c == other)
    }

    /// Direct children of this category.
    pub fn children(self) -> impl Iterator<Item = Category> {
        Self::ALL
            .into_iter()
            .filter(move |c| c.parent() == Some(self))
    }

    /// Capability record, resolved on the root category.
    #[must_use]
    pub fn capabilities(self) -> Capabilities {
        match self.root() {
            Self::Beer => Capabilities {
                has_abv: true,
                pourable: true,
                portions: BEER_PORTIONS,
            },
            Self::Wine => Capabilities {
                has_abv: true,
                pourable: true,
                portions: WINE_PORTIONS,
            },
            Self::Spirit => Capabilities {
                has_abv: true,
                pourable: true,
                portions: SPIRIT_PORTIONS,
            },
            Self::Mixer => Capabilities {
                has_abv: false,
                pourable: true,
                portions: MIXER_PORTIONS,
            },
            _ => Capabilities {
                has_abv: false,
                pourable: false,
                portions: &[],
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
