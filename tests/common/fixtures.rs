use serde_json::{json, Value};

pub fn design_brief() -> Value {
    json!({
        "title": "Summer Sale",
        "main_color": "#FF6600",
        "background_color": "#FFF8F0",
        "style": "playful"
    })
}

/// A state with a title, a subtitle, an oversized image without a source and a call to action
pub fn workflow_state() -> Value {
    json!({
        "design_brief": design_brief(),
        "asset_list": {
            "background_layer": {
                "src": "https://cdn.example/bg.png",
                "width": 1080,
                "height": 1920
            },
            "foreground_layer": { "src": "https://cdn.example/fg.png" }
        },
        "final_poster": {
            "dsl_instructions": [
                { "command": "add_title", "content": "Summer Sale" },
                { "command": "add_subtitle", "content": "Up to 50% off" },
                { "command": "add_hero_image", "width": 1600, "height": 1200 },
                { "command": "add_cta", "content": "Shop now" }
            ]
        },
        "canvas_width": 1080,
        "canvas_height": 1920
    })
}

/// A state whose layout was computed elsewhere
pub fn precomputed_state() -> Value {
    json!({
        "design_brief": { "background_color": "#000000" },
        "final_poster": {
            "layers": [
                {
                    "type": "rect",
                    "id": "bg",
                    "width": 720,
                    "height": 1280,
                    "backgroundColor": "#222222"
                },
                { "type": "text", "id": "headline", "x": 40, "y": 60, "content": "Hello" }
            ]
        },
        "canvas_width": 720,
        "canvas_height": 1280
    })
}

pub fn instructions_with_noise() -> Value {
    json!([
        "not an instruction",
        { "command": "add_video", "src": "clip.mp4" },
        { "command": "add_text", "content": "Kept" },
        { "command": "add_image", "asset": "unregistered" }
    ])
}
