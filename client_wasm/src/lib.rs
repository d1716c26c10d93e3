//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for the WebGPU API, with the HUD as a DOM
//! overlay. The match itself runs in `game_core`; this crate feeds it
//! keyboard state and wall-clock time and draws the result.
//!
//! Note: the Canvas surface target is only available on wasm32, so the
//! renderer, overlay and exported bindings are gated on it.

pub mod camera;
pub mod input;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use client::*;

#[cfg(target_arch = "wasm32")]
mod client {
    use crate::input::{handle_key_down, handle_key_up};
    use crate::overlay::Overlay;
    use crate::renderer::Renderer;
    use game_core::{hud, Config, GameMap, InputState, Match};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    /// Main client state
    struct Client {
        renderer: Renderer,
        overlay: Overlay,
        game: Match,
        input: InputState,
        last_frame_ms: Option<f64>,
    }

    impl Client {
        async fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
            let config = Config::default();
            let map = GameMap::from_config(&config);
            canvas.set_width(config.screen_width as u32);
            canvas.set_height(config.screen_height as u32);

            // A missing logo is fatal, so load it before touching the GPU
            let overlay = Overlay::new(&canvas, &map, &config).await?;
            let renderer = match Renderer::new(canvas, &config).await {
                Ok(renderer) => renderer,
                Err(e) => {
                    overlay.remove();
                    return Err(e);
                }
            };

            let seed = (js_sys::Math::random() * u32::MAX as f64) as u64
                ^ js_sys::Date::now() as u64;

            Ok(Self {
                renderer,
                overlay,
                game: Match::new(config, seed),
                input: InputState::new(),
                last_frame_ms: None,
            })
        }

        /// Advance the match to `now_ms` and draw it. `Ok(false)` once the
        /// match has ended.
        fn frame(&mut self, now_ms: f64) -> Result<bool, String> {
            let elapsed = self
                .last_frame_ms
                .map(|last| ((now_ms - last) / 1000.0) as f32)
                .unwrap_or(0.0);
            self.last_frame_ms = Some(now_ms);

            self.game.advance(elapsed, &self.input);
            if self.game.is_over() {
                return Ok(false);
            }

            self.renderer.draw(&self.game)?;
            self.overlay.update(
                &hud::score_text(&self.game.score()),
                self.game.countdown_digit(),
            )?;
            Ok(true)
        }

        fn shutdown(mut self) {
            self.input.quit = true;
            self.game.tick(&self.input);
            self.overlay.remove();
            let score = self.game.score();
            log::info!(
                "Client shut down at Opponent {} - Player {}",
                score.far,
                score.near
            );
            // Renderer (device, surface, buffers) drops here
        }
    }

    // Global client storage for WASM bindings
    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Option<R> {
        CLIENT.with(|cell| cell.borrow_mut().as_mut().map(f))
    }

    fn take_client() -> Option<Client> {
        CLIENT.with(|cell| cell.borrow_mut().take())
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        wasm_bindgen_futures::future_to_promise(async move {
            match Client::new(canvas).await {
                Ok(client) => {
                    if let Some(old) = take_client() {
                        old.shutdown();
                    }
                    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
                    log::info!("Client initialized");
                    Ok(JsValue::UNDEFINED)
                }
                Err(e) => {
                    log::error!("Client failed to start: {}", e);
                    Err(JsValue::from_str(&e))
                }
            }
        })
    }

    #[wasm_bindgen]
    pub fn key_down(key: &str) {
        with_client(|client| client.input = handle_key_down(key, client.input));
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) {
        with_client(|client| client.input = handle_key_up(key, client.input));
    }

    /// Run one animation frame. Resolves to `false` when there is nothing
    /// left to run, so the page can stop its loop.
    #[wasm_bindgen]
    pub fn render_frame(now_ms: f64) -> Result<bool, JsValue> {
        match with_client(|client| client.frame(now_ms)) {
            None => Ok(false),
            Some(Ok(true)) => Ok(true),
            Some(Ok(false)) => {
                if let Some(client) = take_client() {
                    client.shutdown();
                }
                Ok(false)
            }
            Some(Err(e)) => Err(JsValue::from_str(&e)),
        }
    }

    /// Close request from the page; ends the match and releases everything
    #[wasm_bindgen]
    pub fn request_quit() {
        if let Some(client) = take_client() {
            client.shutdown();
        }
    }
}
