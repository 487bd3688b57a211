// GLSL vocabulary used to classify identifier-shaped tokens.
// None of the lists is exhaustive: a name missing here lexes as a plain identifier.

use lazy_static::lazy_static;
use std::collections::HashSet;

const KEYWORDS: &[&str] = &[
    // control flow
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue", "return",
    "discard",
    // qualifiers
    "const", "attribute", "uniform", "varying", "buffer", "shared", "coherent", "volatile",
    "restrict", "readonly", "writeonly", "layout", "centroid", "flat", "smooth", "noperspective",
    "patch", "sample", "in", "out", "inout", "invariant", "precise",
    // precision
    "highp", "mediump", "lowp", "precision",
];

const TYPES: &[&str] = &[
    "void", "bool", "int", "uint", "float", "double",
    "vec2", "vec3", "vec4", "bvec2", "bvec3", "bvec4", "ivec2", "ivec3", "ivec4", "uvec2", "uvec3",
    "uvec4",
    "mat2", "mat3", "mat4", "mat2x2", "mat2x3", "mat2x4", "mat3x2", "mat3x3", "mat3x4", "mat4x2",
    "mat4x3", "mat4x4",
    "sampler2D", "isampler2D", "usampler2D", "sampler3D", "isampler3D", "usampler3D",
    "samplerCube", "isamplerCube", "usamplerCube", "sampler2DShadow", "samplerCubeShadow",
    "sampler2DArray", "isampler2DArray", "usampler2DArray", "sampler2DArrayShadow",
    "samplerBuffer", "isamplerBuffer", "usamplerBuffer", "sampler2DMS", "isampler2DMS",
    "usampler2DMS", "sampler2DMSArray", "isampler2DMSArray", "usampler2DMSArray",
];

const BUILTINS: &[&str] = &[
    // angle and trigonometry
    "radians", "degrees", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh",
    "asinh", "acosh", "atanh",
    // exponential
    "pow", "exp", "log", "exp2", "log2", "sqrt", "inversesqrt",
    // common
    "abs", "sign", "floor", "trunc", "round", "roundEven", "ceil", "fract", "mod", "modf", "min",
    "max", "clamp", "mix", "step", "smoothstep",
    // geometric
    "length", "distance", "dot", "cross", "normalize", "faceforward", "reflect", "refract",
    // matrix
    "matrixCompMult", "outerProduct", "transpose", "determinant", "inverse",
    // vector relational
    "lessThan", "lessThanEqual", "greaterThan", "greaterThanEqual", "equal", "notEqual", "any",
    "all", "not",
    // texture lookup and derivatives
    "texture", "textureLod", "textureProj", "textureLodProj", "textureGrad", "textureSize", "dFdx",
    "dFdy", "fwidth",
    // built-in variables
    "gl_Position", "gl_FragCoord", "gl_FragColor", "gl_FragData", "gl_PointCoord", "gl_PointSize",
    "gl_VertexID", "gl_InstanceID", "gl_FrontFacing", "gl_DepthRange",
];

lazy_static! {
    static ref KEYWORD_SET: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
    static ref TYPE_SET: HashSet<&'static str> = TYPES.iter().copied().collect();
    static ref BUILTIN_SET: HashSet<&'static str> = BUILTINS.iter().copied().collect();
}

pub fn is_keyword(name: &str) -> bool {
    KEYWORD_SET.contains(name)
}

pub fn is_type(name: &str) -> bool {
    TYPE_SET.contains(name)
}

/// Built-in functions and `gl_*` variables.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_SET.contains(name)
}
