use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_editor, text_input},
};

/// Warm hillside palette: deep teal primary, orange accent, sand
/// highlights on a light cream page.
#[derive(Debug, Clone, Copy)]
pub struct CoolstayTheme;

impl CoolstayTheme {
    // Core colors
    pub const TEAL: Color = Color::from_rgb(0.067, 0.392, 0.400); // #116466
    pub const TEAL_HOVER: Color = Color::from_rgb(0.086, 0.478, 0.490);
    pub const ORANGE: Color = Color::from_rgb(0.902, 0.494, 0.133); // #E67E22
    pub const SAND: Color = Color::from_rgb(0.851, 0.690, 0.549); // #D9B08C

    // Page surfaces
    pub const PAGE_LIGHT: Color = Color::from_rgb(0.980, 0.965, 0.940); // #FAF6F0
    pub const BEIGE: Color = Color::from_rgb(0.960, 0.937, 0.902); // #F5EFE6
    pub const CARD_BG: Color = Color::WHITE;
    pub const CARD_HOVER: Color = Color::from_rgb(0.992, 0.984, 0.968);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.898, 0.875, 0.839);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.184, 0.200, 0.216); // #2F3337
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.420, 0.443, 0.459);
    pub const TEXT_ON_DARK: Color = Color::WHITE;
    pub const TEXT_ON_DARK_DIM: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.8);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.620, 0.357); // #009E5B
    pub const ERROR: Color = Color::from_rgb(0.827, 0.184, 0.184); // #D32F2F
    pub const INFO: Color = Self::TEAL;

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::PAGE_LIGHT;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::TEAL;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Coolstay Light".to_string(), palette)
    }
}

/// Darken a color by a factor in [0, 1].
pub fn darken(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * (1.0 - factor)).max(0.0),
        g: (color.g * (1.0 - factor)).max(0.0),
        b: (color.b * (1.0 - factor)).max(0.0),
        a: color.a,
    }
}

/// A color with its alpha replaced.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// Container styles using closures
#[derive(Debug)]
pub enum Container {
    Page,
    /// Fixed header while the page is at the top: fully transparent.
    Navbar,
    /// Fixed header once scrolled past the threshold: solid with a
    /// hairline shadow.
    NavbarSolid,
    MobileMenu,
    /// Dark scrim over the hero and showcase imagery so text stays legible.
    Scrim,
    /// The short orange underline bar below section headings.
    AccentBar,
    Card,
    CardHovered,
    FeatureCard,
    Modal,
    ModalOverlay,
    SuccessBox,
    ErrorBox,
    Footer,
    Lightbox,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(
                    CoolstayTheme::PAGE_LIGHT,
                )),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Navbar => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_ON_DARK),
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::NavbarSolid => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(with_alpha(
                    Color::WHITE,
                    0.95,
                ))),
                border: Border::default(),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 6.0,
                },
            },
            Container::MobileMenu => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(Color::WHITE)),
                border: Border::default(),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                },
            },
            Container::Scrim => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_ON_DARK),
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.45,
                ))),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::AccentBar => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(CoolstayTheme::ORANGE)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Card => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(CoolstayTheme::CARD_BG)),
                border: Border {
                    color: CoolstayTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
            },
            Container::CardHovered => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(
                    CoolstayTheme::CARD_HOVER,
                )),
                border: Border {
                    color: CoolstayTheme::SAND,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                    offset: Vector::new(0.0, 6.0),
                    blur_radius: 16.0,
                },
            },
            Container::FeatureCard => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(CoolstayTheme::BEIGE)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 10.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Modal => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(CoolstayTheme::CARD_BG)),
                border: Border {
                    color: CoolstayTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 20.0,
                },
            },
            Container::ModalOverlay => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.6,
                ))),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::SuccessBox => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_PRIMARY),
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.62, 0.357, 0.10,
                ))),
                border: Border {
                    color: CoolstayTheme::SUCCESS,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(CoolstayTheme::ERROR),
                background: Some(Background::Color(Color::from_rgba(
                    0.827, 0.184, 0.184, 0.08,
                ))),
                border: Border {
                    color: CoolstayTheme::ERROR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Footer => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_ON_DARK),
                background: Some(Background::Color(CoolstayTheme::TEAL)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Lightbox => |_| container::Style {
                text_color: Some(CoolstayTheme::TEXT_ON_DARK),
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.9,
                ))),
                border: Border::default(),
                shadow: Shadow::default(),
            },
        }
    }
}

// Button styles using closures
#[derive(Debug)]
pub enum Button {
    Primary,
    Accent,
    NavLink,
    NavLinkOnDark,
    FooterLink,
    /// Translucent white circle over carousel imagery.
    CarouselArrow,
    Dot,
    DotActive,
    Close,
    ScrollTop,
    Disabled,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Active => CoolstayTheme::TEAL,
                    button::Status::Hovered => CoolstayTheme::TEAL_HOVER,
                    button::Status::Pressed => {
                        darken(CoolstayTheme::TEAL, 0.15)
                    }
                    button::Status::Disabled => {
                        with_alpha(CoolstayTheme::TEAL, 0.5)
                    }
                };

                button::Style {
                    text_color: CoolstayTheme::TEXT_ON_DARK,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                        offset: Vector::new(0.0, 2.0),
                        blur_radius: 6.0,
                    },
                }
            },
            Button::Accent => |_, status| {
                let background = match status {
                    button::Status::Active => CoolstayTheme::ORANGE,
                    button::Status::Hovered => {
                        darken(CoolstayTheme::ORANGE, 0.08)
                    }
                    button::Status::Pressed => {
                        darken(CoolstayTheme::ORANGE, 0.18)
                    }
                    button::Status::Disabled => {
                        with_alpha(CoolstayTheme::ORANGE, 0.5)
                    }
                };

                button::Style {
                    text_color: CoolstayTheme::TEXT_ON_DARK,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                        offset: Vector::new(0.0, 2.0),
                        blur_radius: 6.0,
                    },
                }
            },
            Button::NavLink => |_, status| {
                let text_color = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CoolstayTheme::TEAL
                    }
                    _ => CoolstayTheme::TEXT_PRIMARY,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                }
            },
            Button::NavLinkOnDark => |_, status| {
                let text_color = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CoolstayTheme::SAND
                    }
                    _ => CoolstayTheme::TEXT_ON_DARK,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                }
            },
            Button::FooterLink => |_, status| {
                let text_color = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CoolstayTheme::SAND
                    }
                    _ => CoolstayTheme::TEXT_ON_DARK_DIM,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                }
            },
            Button::CarouselArrow => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::WHITE
                    }
                    _ => with_alpha(Color::WHITE, 0.7),
                };

                button::Style {
                    text_color: CoolstayTheme::TEAL,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 20.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Dot => |_, _| button::Style {
                text_color: Color::TRANSPARENT,
                background: Some(Background::Color(with_alpha(
                    Color::WHITE,
                    0.5,
                ))),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            },
            Button::DotActive => |_, _| button::Style {
                text_color: Color::TRANSPARENT,
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            },
            Button::Close => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::from_rgba(0.0, 0.0, 0.0, 0.7)
                    }
                    _ => Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                };

                button::Style {
                    text_color: CoolstayTheme::TEXT_ON_DARK,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 18.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::ScrollTop => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        CoolstayTheme::TEAL_HOVER
                    }
                    _ => CoolstayTheme::TEAL,
                };

                button::Style {
                    text_color: CoolstayTheme::TEXT_ON_DARK,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 24.0.into(),
                    },
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                        offset: Vector::new(0.0, 2.0),
                        blur_radius: 10.0,
                    },
                }
            },
            Button::Disabled => |_, _| button::Style {
                text_color: with_alpha(CoolstayTheme::TEXT_ON_DARK, 0.8),
                background: Some(Background::Color(with_alpha(
                    CoolstayTheme::TEAL,
                    0.5,
                ))),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

/// Form field styling shared by the booking dialog and contact form.
pub fn text_input_style(
    _theme: &Theme,
    status: text_input::Status,
) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => CoolstayTheme::TEAL,
        text_input::Status::Hovered => CoolstayTheme::SAND,
        _ => CoolstayTheme::BORDER_COLOR,
    };

    text_input::Style {
        background: Background::Color(Color::WHITE),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: CoolstayTheme::TEXT_SECONDARY,
        placeholder: with_alpha(CoolstayTheme::TEXT_SECONDARY, 0.8),
        value: CoolstayTheme::TEXT_PRIMARY,
        selection: with_alpha(CoolstayTheme::TEAL, 0.3),
    }
}

/// Compose a palette button style with an entrance alpha, for buttons
/// that ride a reveal or the hero entrance.
pub fn faded_button(
    style: Button,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let mut styled = (style.style())(theme, status);
        if let Some(Background::Color(color)) = styled.background {
            styled.background =
                Some(Background::Color(with_alpha(color, color.a * alpha)));
        }
        styled.text_color =
            with_alpha(styled.text_color, styled.text_color.a * alpha);
        styled.border.color =
            with_alpha(styled.border.color, styled.border.color.a * alpha);
        styled
    }
}

/// Multiline counterpart of [`text_input_style`].
pub fn text_editor_style(
    _theme: &Theme,
    status: text_editor::Status,
) -> text_editor::Style {
    let border_color = match status {
        text_editor::Status::Focused => CoolstayTheme::TEAL,
        text_editor::Status::Hovered => CoolstayTheme::SAND,
        _ => CoolstayTheme::BORDER_COLOR,
    };

    text_editor::Style {
        background: Background::Color(Color::WHITE),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: CoolstayTheme::TEXT_SECONDARY,
        placeholder: with_alpha(CoolstayTheme::TEXT_SECONDARY, 0.8),
        value: CoolstayTheme::TEXT_PRIMARY,
        selection: with_alpha(CoolstayTheme::TEAL, 0.3),
    }
}

// Text tones for views
#[derive(Debug, Clone, Copy)]
pub enum TextTone {
    Heading,
    Body,
    Subdued,
    OnDark,
    OnDarkDim,
    Error,
}

impl TextTone {
    pub fn color(&self) -> Color {
        match self {
            TextTone::Heading => CoolstayTheme::TEAL,
            TextTone::Body => CoolstayTheme::TEXT_PRIMARY,
            TextTone::Subdued => CoolstayTheme::TEXT_SECONDARY,
            TextTone::OnDark => CoolstayTheme::TEXT_ON_DARK,
            TextTone::OnDarkDim => CoolstayTheme::TEXT_ON_DARK_DIM,
            TextTone::Error => CoolstayTheme::ERROR,
        }
    }
}
