//! End-to-end tests for the tokenize + render pipeline

use shadepad::engine::config::HighlightConfig;
use shadepad::glsl::{tokenize, TokenKind};
use shadepad::highlight::{render, render_with};
use shadepad::input::{self, ShaderSource};
use shadepad::ui::{parse_args, run_batch};
use std::fs;

const FRAGMENT: &str = "#version 300 es\n\
precision mediump float;\n\
\n\
uniform sampler2D uTexture;\n\
in vec2 vUv;\n\
out vec4 fragColor;\n\
\n\
/* tint the texture\n   over time */\n\
void main() {\n\
\tvec4 color = texture(uTexture, vUv);\n\
\tfragColor = mix(color, vec4(1.0, 0.5, 0.25, 1.0), 0.5e-1f); // blend\n\
}\n";

#[test]
fn test_fragment_shader_round_trips() {
    let tokens = tokenize(FRAGMENT);
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, FRAGMENT);
}

#[test]
fn test_fragment_shader_classification() {
    let tokens = tokenize(FRAGMENT);
    let kind_of = |text: &str| {
        tokens
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.kind)
            .unwrap_or_else(|| panic!("no token {:?}", text))
    };

    assert_eq!(kind_of("#version 300 es"), TokenKind::Preprocessor);
    assert_eq!(kind_of("precision"), TokenKind::Keyword);
    assert_eq!(kind_of("mediump"), TokenKind::Keyword);
    assert_eq!(kind_of("sampler2D"), TokenKind::Type);
    assert_eq!(kind_of("uTexture"), TokenKind::Identifier);
    assert_eq!(kind_of("texture"), TokenKind::Builtin);
    assert_eq!(kind_of("mix"), TokenKind::Builtin);
    assert_eq!(kind_of("0.5e-1f"), TokenKind::Number);
    assert_eq!(kind_of("// blend"), TokenKind::Comment);
    assert_eq!(kind_of("/* tint the texture\n   over time */"), TokenKind::Comment);
}

#[test]
fn test_rendered_markup_keeps_whitespace_unwrapped() {
    let markup = render(&tokenize(FRAGMENT));
    assert!(markup.contains("<span class=\"token-type\">void</span> <span class=\"token-identifier\">main</span>"));
    assert!(markup.contains("<span class=\"token-punctuation\">{</span>\n\t<span class=\"token-type\">vec4</span>"));
    assert!(markup.ends_with("<span class=\"token-punctuation\">}</span>\n\n"));
    assert!(!markup.contains("<span class=\"token-whitespace\">"));
}

#[test]
fn test_markup_has_no_raw_specials_outside_wrappers() {
    let source = "if (a < b && c > d) { s = \"<tag attr='x'>\"; } // a&b";
    let markup = render(&tokenize(source));
    let stripped = markup
        .replace("</span>", "")
        .split("<span class=\"")
        .map(|piece| piece.split_once("\">").map_or(piece, |(_, rest)| rest))
        .collect::<String>();
    assert!(!stripped.contains('<'));
    assert!(!stripped.contains('>'));
    assert!(!stripped.contains('"'));
    assert!(!stripped.contains('\''));
    assert!(stripped.contains("&lt;tag attr=&#39;x&#39;&gt;"));
    assert!(stripped.contains("&amp;"));
}

#[test]
fn test_custom_config_round_trip() {
    let config = HighlightConfig {
        class_prefix: "glsl-".to_string(),
        trailing_newline: false,
    };
    let markup = render_with(&tokenize("float x;"), &config);
    assert_eq!(
        markup,
        "<span class=\"glsl-type\">float</span> <span class=\"glsl-identifier\">x</span><span class=\"glsl-punctuation\">;</span>"
    );
}

#[test]
fn test_html_command_on_file() {
    let path = std::env::temp_dir().join(format!("shadepad_it_{}.vert", std::process::id()));
    fs::write(&path, "gl_Position = vec4(0.0);").unwrap();

    let loaded = input::load(&ShaderSource::File(path.clone())).unwrap();
    assert_eq!(loaded.text, "gl_Position = vec4(0.0);");

    let args = vec!["html".to_string(), format!("@{}", path.display())];
    let invocation = parse_args(&args).unwrap();
    let mut out = Vec::new();
    run_batch(&invocation, &mut out).unwrap();
    let markup = String::from_utf8(out).unwrap();
    assert_eq!(markup, render(&tokenize(&loaded.text)));
    assert!(markup.starts_with("<span class=\"token-builtin\">gl_Position</span>"));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_tokens_command_on_file() {
    let path = std::env::temp_dir().join(format!("shadepad_it_{}.frag", std::process::id()));
    fs::write(&path, "discard;").unwrap();

    let args = vec!["tokens".to_string(), path.display().to_string()];
    let mut out = Vec::new();
    run_batch(&parse_args(&args).unwrap(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "keyword\t\"discard\"\npunctuation\t\";\"\n"
    );

    fs::remove_file(path).unwrap();
}
