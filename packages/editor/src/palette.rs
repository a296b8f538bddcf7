//! # Palettes
//!
//! Fixed option tables backing every select control in the property form.
//!
//! A palette token is the value stored on a block (usually one or more
//! class tokens separated by spaces). The export stylesheet translates each
//! class token into literal CSS, so every token listed here must have a rule
//! there.

/// Sentinel selector value meaning "use the custom literal instead".
pub const CUSTOM: &str = "custom";

/// One selectable option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteOption {
    /// Stored value
    pub token: &'static str,

    /// Human-readable label for the form
    pub label: &'static str,
}

/// Named, ordered list of options with a default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub options: &'static [PaletteOption],
    default: usize,
}

impl Palette {
    pub fn default_token(&self) -> &'static str {
        self.options[self.default].token
    }

    pub fn find(&self, token: &str) -> Option<&'static PaletteOption> {
        self.options.iter().find(|option| option.token == token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    /// Return the matching token, or the palette default when `token` is
    /// not one of the options.
    pub fn resolve(&self, token: &str) -> &'static str {
        match self.find(token.trim()) {
            Some(option) => option.token,
            None => self.default_token(),
        }
    }

    /// Every class token used by this palette, split on whitespace
    pub fn class_tokens(&self) -> impl Iterator<Item = &'static str> {
        self.options
            .iter()
            .flat_map(|option| option.token.split_whitespace())
    }
}

const fn option(token: &'static str, label: &'static str) -> PaletteOption {
    PaletteOption { token, label }
}

pub const HEADING_SIZE: Palette = Palette {
    name: "headingSize",
    options: &[
        option("text-xl", "Small (XL)"),
        option("text-2xl", "Medium (2XL)"),
        option("text-3xl", "Large (3XL)"),
        option("text-4xl", "Extra Large (4XL)"),
    ],
    default: 1,
};

pub const HEADING_COLOR: Palette = Palette {
    name: "headingColor",
    options: &[
        option("text-gray-800", "Dark Gray"),
        option("text-black", "Black"),
        option("text-indigo-600", "Indigo"),
        option("text-blue-600", "Blue"),
        option("text-green-600", "Green"),
        option("text-red-600", "Red"),
    ],
    default: 0,
};

pub const TEXT_ALIGN: Palette = Palette {
    name: "textAlign",
    options: &[
        option("text-left", "Left"),
        option("text-center", "Center"),
        option("text-right", "Right"),
    ],
    default: 0,
};

pub const TEXT_SIZE: Palette = Palette {
    name: "textSize",
    options: &[
        option("text-sm", "Small"),
        option("text-base", "Medium"),
        option("text-lg", "Large"),
        option("text-xl", "Extra Large"),
    ],
    default: 1,
};

/// Shared by text and list blocks
pub const TEXT_COLOR: Palette = Palette {
    name: "textColor",
    options: &[
        option("text-gray-700", "Gray"),
        option("text-black", "Black"),
        option("text-indigo-600", "Indigo"),
        option("text-blue-600", "Blue"),
        option("text-green-600", "Green"),
        option("text-red-600", "Red"),
    ],
    default: 0,
};

pub const IMAGE_WIDTH: Palette = Palette {
    name: "imageWidth",
    options: &[
        option("w-full max-w-xs", "Small (XS)"),
        option("w-full max-w-sm", "Small (SM)"),
        option("w-full max-w-md", "Medium (MD)"),
        option("w-full max-w-lg", "Large (LG)"),
        option("w-full max-w-xl", "Extra Large (XL)"),
        option("w-full", "Full Width"),
    ],
    default: 2,
};

pub const IMAGE_ALIGN: Palette = Palette {
    name: "imageAlign",
    options: &[
        option("mx-auto", "Center"),
        option("mr-auto", "Left"),
        option("ml-auto", "Right"),
    ],
    default: 0,
};

pub const BUTTON_COLOR: Palette = Palette {
    name: "buttonColor",
    options: &[
        option("bg-indigo-600 hover:bg-indigo-700", "Indigo"),
        option("bg-blue-600 hover:bg-blue-700", "Blue"),
        option("bg-green-600 hover:bg-green-700", "Green"),
        option("bg-red-600 hover:bg-red-700", "Red"),
        option("bg-purple-600 hover:bg-purple-700", "Purple"),
        option("bg-gray-600 hover:bg-gray-700", "Gray"),
    ],
    default: 0,
};

pub const BUTTON_SIZE: Palette = Palette {
    name: "buttonSize",
    options: &[
        option("px-4 py-2 text-sm", "Small"),
        option("px-6 py-3 text-base", "Medium"),
        option("px-8 py-4 text-lg", "Large"),
    ],
    default: 1,
};

pub const TABLE_BORDER: Palette = Palette {
    name: "tableBorder",
    options: &[
        option("border border-gray-300", "Gray Border"),
        option("border border-black", "Black Border"),
        option("border-0", "No Border"),
        option("border border-blue-300", "Blue Border"),
        option("border border-green-300", "Green Border"),
    ],
    default: 0,
};

pub const TABLE_WIDTH: Palette = Palette {
    name: "tableWidth",
    options: &[
        option("w-full", "Full Width"),
        option("w-3/4", "75%"),
        option("w-1/2", "50%"),
        option("w-1/3", "33%"),
    ],
    default: 0,
};

pub const DIVIDER_STYLE: Palette = Palette {
    name: "dividerStyle",
    options: &[
        option("border-t-2 border-gray-300", "Solid Gray"),
        option("border-t-2 border-black", "Solid Black"),
        option("border-t border-dashed border-gray-400", "Dashed Gray"),
        option("border-t-4 border-indigo-500", "Thick Indigo"),
        option("border-t-2 border-red-400", "Red"),
        option("border-t-2 border-green-400", "Green"),
        option("border-t-2 border-blue-400", "Blue"),
    ],
    default: 0,
};

pub const DIVIDER_SPACING: Palette = Palette {
    name: "dividerSpacing",
    options: &[
        option("my-2", "Small (8px)"),
        option("my-4", "Medium (16px)"),
        option("my-6", "Large (24px)"),
        option("my-8", "Extra Large (32px)"),
    ],
    default: 1,
};

pub const SPACER_HEIGHT: Palette = Palette {
    name: "spacerHeight",
    options: &[
        option("py-2", "Small (16px)"),
        option("py-4", "Medium (32px)"),
        option("py-6", "Large (48px)"),
        option("py-8", "Extra Large (64px)"),
        option("py-12", "Huge (96px)"),
    ],
    default: 1,
};

pub const SPACER_GUIDE: Palette = Palette {
    name: "spacerVisual",
    options: &[
        option("true", "Show in Builder"),
        option("false", "Hide in Builder"),
    ],
    default: 0,
};

pub const LIST_TYPE: Palette = Palette {
    name: "listType",
    options: &[
        option("ul", "Bullet Points (•)"),
        option("ol", "Numbered List (1, 2, 3)"),
    ],
    default: 0,
};

pub const LIST_STYLE: Palette = Palette {
    name: "listStyle",
    options: &[
        option("list-disc list-inside", "Disc Bullets"),
        option("list-decimal list-inside", "Numbers"),
        option("list-square list-inside", "Square Bullets"),
        option("list-none", "No Bullets/Numbers"),
    ],
    default: 0,
};

pub const CANVAS_BACKGROUND: Palette = Palette {
    name: "canvasBackgroundColor",
    options: &[
        option("#ffffff", "White"),
        option("#f8fafc", "Light Gray"),
        option("#f1f5f9", "Slate"),
        option("#fef2f2", "Light Red"),
        option("#f0f9ff", "Light Blue"),
        option("#f0fdf4", "Light Green"),
        option("#fefce8", "Light Yellow"),
        option("#faf5ff", "Light Purple"),
    ],
    default: 0,
};

/// Palettes whose tokens end up as class names in exported markup
pub const STYLED_PALETTES: &[Palette] = &[
    HEADING_SIZE,
    HEADING_COLOR,
    TEXT_ALIGN,
    TEXT_SIZE,
    TEXT_COLOR,
    IMAGE_WIDTH,
    IMAGE_ALIGN,
    BUTTON_COLOR,
    BUTTON_SIZE,
    TABLE_BORDER,
    TABLE_WIDTH,
    DIVIDER_STYLE,
    DIVIDER_SPACING,
    SPACER_HEIGHT,
    LIST_STYLE,
];

/// Guide label shown on spacer blocks in the editor surface
pub fn spacer_guide_height(token: &str) -> &'static str {
    match token {
        "py-2" => "16px",
        "py-4" => "32px",
        "py-6" => "48px",
        "py-8" => "64px",
        "py-12" => "96px",
        _ => "32px",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        assert_eq!(HEADING_SIZE.default_token(), "text-2xl");
        assert_eq!(IMAGE_WIDTH.default_token(), "w-full max-w-md");
        assert_eq!(CANVAS_BACKGROUND.default_token(), "#ffffff");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(TEXT_ALIGN.resolve("text-right"), "text-right");
        assert_eq!(TEXT_ALIGN.resolve("text-justify"), "text-left");
        assert_eq!(TEXT_ALIGN.resolve(" text-center "), "text-center");
    }

    #[test]
    fn test_class_tokens_split_compound_options() {
        let tokens: Vec<_> = BUTTON_SIZE.class_tokens().collect();
        assert!(tokens.contains(&"px-4"));
        assert!(tokens.contains(&"text-lg"));
        assert!(!tokens.iter().any(|t| t.contains(' ')));
    }
}
