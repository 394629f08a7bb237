use crate::components::virtual_list::Viewport;

pub(crate) const DEFAULT_TITLE: &str = "수연's 일정 관리";

pub(crate) const MAX_SEED_COUNT: u32 = 100_000;
pub(crate) const MAX_OVERSCAN: usize = 50;
pub(crate) const MAX_VIEWPORT_PX: u32 = 16_384;

/// Startup settings for the list page.
///
/// Any field can be overridden from `window.ENV` (see [`ListConfig::new`]).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ListConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub row_height: u32,
    pub overscan: usize,
    pub seed_count: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 512,
            height: 513,
            row_height: 57,
            overscan: 0,
            seed_count: 2500,
        }
    }
}

impl ListConfig {
    pub fn new() -> Self {
        let config = match read_env_object() {
            Some(env) => Self::default().with_overrides(
                |key| {
                    js_sys::Reflect::get(&env, &key.into())
                        .ok()
                        .and_then(|v| v.as_f64())
                },
                |key| {
                    js_sys::Reflect::get(&env, &key.into())
                        .ok()
                        .and_then(|v| v.as_string())
                },
            ),
            None => Self::default(),
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("invalid list config ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Applies `LIST_WIDTH`, `LIST_HEIGHT`, `ROW_HEIGHT`, `OVERSCAN`,
    /// `SEED_COUNT` and `TITLE`. Keys that are absent or negative keep their
    /// current value.
    pub fn with_overrides(
        mut self,
        number: impl Fn(&str) -> Option<f64>,
        text: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let count = |key: &str| {
            number(key)
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.round() as u32)
        };

        if let Some(v) = count("LIST_WIDTH") {
            self.width = v;
        }
        if let Some(v) = count("LIST_HEIGHT") {
            self.height = v;
        }
        if let Some(v) = count("ROW_HEIGHT") {
            self.row_height = v;
        }
        if let Some(v) = count("OVERSCAN") {
            self.overscan = v as usize;
        }
        if let Some(v) = count("SEED_COUNT") {
            self.seed_count = v;
        }
        if let Some(title) = text("TITLE").filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.row_height == 0 {
            return Err("row height must be positive".to_string());
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }
        if self.width > MAX_VIEWPORT_PX || self.height > MAX_VIEWPORT_PX {
            return Err(format!(
                "viewport {}x{} exceeds {MAX_VIEWPORT_PX}px",
                self.width, self.height
            ));
        }
        if self.row_height > MAX_VIEWPORT_PX {
            return Err(format!("row height {} exceeds {MAX_VIEWPORT_PX}px", self.row_height));
        }
        if self.overscan > MAX_OVERSCAN {
            return Err(format!("overscan {} exceeds {MAX_OVERSCAN}", self.overscan));
        }
        if self.seed_count > MAX_SEED_COUNT {
            return Err(format!("seed count {} exceeds {MAX_SEED_COUNT}", self.seed_count));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            row_height: self.row_height,
            overscan: self.overscan,
        }
    }
}

fn read_env_object() -> Option<wasm_bindgen::JsValue> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }
    Some(env.into())
}
