//! Console greeting

/// A styled console line (`%c` format plus CSS)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BannerLine {
    pub text: &'static str,
    pub css: &'static str,
}

/// Lines logged once at start-up
pub fn welcome_banner() -> [BannerLine; 3] {
    [
        BannerLine {
            text: "%c💻 Welcome to my portfolio!",
            css: "color: #00ff88; font-size: 20px; font-weight: bold;",
        },
        BannerLine {
            text: "%cBuilt with Rust, WebAssembly & WebGPU",
            css: "color: #00bfff; font-size: 14px;",
        },
        BannerLine {
            text: "%cInterested in the code? Check it out on GitHub!",
            css: "color: #ff00ff; font-size: 14px;",
        },
    ]
}
