//! DOM overlay for the HUD
//!
//! Text and the logo sit in absolutely positioned elements stacked over the
//! canvas, laid out in playfield units (the canvas is one pixel per unit).

use game_core::{hud, Config, GameMap, Params, Rect};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlImageElement};

pub const LOGO_PATH: &str = "assets/logo.png";

pub struct Overlay {
    root: HtmlElement,
    score: HtmlElement,
    countdown: HtmlElement,
    logo: HtmlImageElement,
    last_score: String,
    last_digit: Option<u32>,
}

fn js_err(what: &str, e: wasm_bindgen::JsValue) -> String {
    format!("{}: {:?}", what, e)
}

fn create_div(document: &Document) -> Result<HtmlElement, String> {
    document
        .create_element("div")
        .map_err(|e| js_err("Failed to create element", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "Created element is not an HtmlElement".to_string())
}

fn apply_style(element: &HtmlElement, style: &[(&str, &str)]) -> Result<(), String> {
    let css = element.style();
    for (key, value) in style {
        css.set_property(key, value)
            .map_err(|e| js_err("Failed to set style", e))?;
    }
    Ok(())
}

fn place(element: &HtmlElement, rect: &Rect) -> Result<(), String> {
    apply_style(
        element,
        &[
            ("left", format!("{}px", rect.left()).as_str()),
            ("top", format!("{}px", rect.top()).as_str()),
            ("width", format!("{}px", rect.size.x).as_str()),
            ("height", format!("{}px", rect.size.y).as_str()),
        ],
    )
}

/// Resolves once the image has loaded, rejects if it fails to
async fn load_image(image: &HtmlImageElement, src: &str) -> Result<(), String> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);

    let result = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    result
        .map(|_| ())
        .map_err(|_| format!("Failed to load {}", src))
}

impl Overlay {
    pub async fn new(
        canvas: &HtmlCanvasElement,
        map: &GameMap,
        config: &Config,
    ) -> Result<Self, String> {
        let document = canvas
            .owner_document()
            .ok_or_else(|| "Canvas has no document".to_string())?;
        let parent = canvas
            .parent_element()
            .ok_or_else(|| "Canvas has no parent element".to_string())?;

        let text_color = config.foreground_color.to_css();
        let width = format!("{}px", map.width);
        let height = format!("{}px", map.height);

        let root = create_div(&document)?;
        apply_style(
            &root,
            &[
                ("position", "absolute"),
                ("left", "0"),
                ("top", "0"),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("pointer-events", "none"),
                ("font-family", "sans-serif"),
                ("color", text_color.as_str()),
            ],
        )?;

        // Score line, horizontally centred on its anchor
        let anchor = hud::score_anchor(map);
        let score = create_div(&document)?;
        apply_style(
            &score,
            &[
                ("position", "absolute"),
                ("left", format!("{}px", anchor.x).as_str()),
                ("top", format!("{}px", anchor.y).as_str()),
                ("transform", "translateX(-50%)"),
                ("white-space", "nowrap"),
                ("font-size", format!("{}px", Params::SCORE_FONT_SIZE).as_str()),
            ],
        )?;

        let center = map.center();
        let countdown = create_div(&document)?;
        apply_style(
            &countdown,
            &[
                ("position", "absolute"),
                ("left", format!("{}px", center.x).as_str()),
                ("top", format!("{}px", center.y).as_str()),
                ("transform", "translate(-50%, -50%)"),
                ("padding", "0 12px"),
                ("background", config.background_color.to_css().as_str()),
                ("font-size", format!("{}px", Params::COUNTDOWN_FONT_SIZE).as_str()),
                ("display", "none"),
            ],
        )?;

        let logo = HtmlImageElement::new().map_err(|e| js_err("Failed to create image", e))?;
        load_image(&logo, LOGO_PATH).await?;
        let logo_rect = hud::logo_rect(map, logo.natural_width(), logo.natural_height())
            .ok_or_else(|| format!("{} is empty", LOGO_PATH))?;
        apply_style(&logo, &[("position", "absolute")])?;
        place(&logo, &logo_rect)?;

        for child in [&score, &countdown, logo.unchecked_ref::<HtmlElement>()] {
            root.append_child(child)
                .map_err(|e| js_err("Failed to attach overlay", e))?;
        }
        parent
            .append_child(&root)
            .map_err(|e| js_err("Failed to attach overlay", e))?;

        log::info!("Overlay ready, logo {:?}", logo_rect);

        Ok(Self {
            root,
            score,
            countdown,
            logo,
            last_score: String::new(),
            last_digit: None,
        })
    }

    /// Only touches the DOM when the text actually changes
    pub fn update(&mut self, score_text: &str, digit: Option<u32>) -> Result<(), String> {
        if self.last_score != score_text {
            self.score.set_text_content(Some(score_text));
            self.last_score = score_text.to_string();
        }

        if self.last_digit != digit {
            match digit {
                Some(d) => {
                    self.countdown.set_text_content(Some(&d.to_string()));
                    apply_style(&self.countdown, &[("display", "block")])?;
                }
                None => apply_style(&self.countdown, &[("display", "none")])?,
            }
            self.last_digit = digit;
        }
        Ok(())
    }

    pub fn remove(&self) {
        self.logo.set_src("");
        self.root.remove();
    }
}
