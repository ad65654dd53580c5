use super::structured;
use crate::error::{MarkovError, Result};
use crate::model::context::KEY_SEPARATOR;
use crate::model::word_model::WordModel;

/// Default name of the constant holding the model in the script.
pub const DEFAULT_CONSTANT_NAME: &str = "MARKOV_MODEL";

// Top-level names the script declares or relies on, plus the CommonJS wrapper parameters.
const SCRIPT_NAMES: &[&str] = &[
	"KEY_SEPARATOR", "NotFoundError", "splitKey", "generateMarkovText", "getAvailableStartWords",
	"module", "exports", "require", "__filename", "__dirname",
	"Object", "Math", "String", "Array", "Set", "Error",
	"undefined", "NaN", "Infinity", "eval", "arguments",
];

// ECMAScript reserved words, strict-mode and contextual keywords included.
const RESERVED_WORDS: &[&str] = &[
	"await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
	"do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "implements",
	"import", "in", "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
	"public", "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var",
	"void", "while", "with", "yield",
];

const NAME_PLACEHOLDER: &str = "__MODEL_NAME__";
const SEPARATOR_PLACEHOLDER: &str = "__KEY_SEPARATOR__";

// Sampling routines shipped with the model, mirroring `model::sampler`.
const SAMPLER_SOURCE: &str = r#"const KEY_SEPARATOR = "__KEY_SEPARATOR__";

class NotFoundError extends Error {
  constructor(message) {
    super(message);
    this.name = "NotFoundError";
  }
}

function splitKey(key) {
  const index = key.indexOf(KEY_SEPARATOR);
  return [key.slice(0, index), key.slice(index + 1)];
}

// Generates up to `length` words, starting from a context whose first word is `startWord`.
function generateMarkovText(startWord, length = 50) {
  startWord = String(startWord).toLowerCase().trim();

  const candidates = [];
  for (const key of Object.keys(__MODEL_NAME__)) {
    const [w1, w2] = splitKey(key);
    if (w1 === startWord) {
      candidates.push([w1, w2]);
    }
  }

  if (candidates.length === 0) {
    throw new NotFoundError(`Start word "${startWord}" not found in the model.`);
  }

  const [w1, w2] = candidates[Math.floor(Math.random() * candidates.length)];
  const result = [w1, w2];

  let currentKey = w1 + KEY_SEPARATOR + w2;
  for (let i = 2; i < length; i++) {
    const nextWords = __MODEL_NAME__[currentKey];
    if (!nextWords || nextWords.length === 0) {
      break;
    }

    const nextWord = nextWords[Math.floor(Math.random() * nextWords.length)];
    result.push(nextWord);

    const [, previous] = splitKey(currentKey);
    currentKey = previous + KEY_SEPARATOR + nextWord;
  }

  return result.join(" ");
}

// Distinct first words of every context, sorted.
function getAvailableStartWords() {
  const startWords = new Set();
  for (const key of Object.keys(__MODEL_NAME__)) {
    startWords.add(splitKey(key)[0]);
  }
  return Array.from(startWords).sort();
}

if (typeof module !== "undefined" && module.exports) {
  module.exports = { __MODEL_NAME__, NotFoundError, generateMarkovText, getAvailableStartWords };
}
"#;

/// Renders a self-contained JavaScript module embedding the model.
///
/// The script declares `const <constant_name> = <structured JSON>;` followed by
/// `generateMarkovText(startWord, length = 50)` and `getAvailableStartWords()`,
/// and needs no other file to run.
///
/// # Errors
/// Returns `MarkovError::InvalidConstantName` if `constant_name` is not a
/// plain JavaScript identifier, is a reserved word, or collides with a name
/// the script already uses.
pub fn render(model: &WordModel, constant_name: &str) -> Result<String> {
	if !is_identifier(constant_name)
		|| RESERVED_WORDS.contains(&constant_name)
		|| SCRIPT_NAMES.contains(&constant_name)
	{
		return Err(MarkovError::InvalidConstantName(constant_name.to_owned()));
	}

	let json = structured::to_json(model)?;
	let sampler = SAMPLER_SOURCE
		.replace(SEPARATOR_PLACEHOLDER, &KEY_SEPARATOR.to_string())
		.replace(NAME_PLACEHOLDER, constant_name);

	let mut script = String::with_capacity(json.len() + sampler.len() + 128);
	script.push_str("// Markov model generated by rs-markov\n");
	script.push_str(&format!("const {constant_name} = {json};\n\n"));
	script.push_str(&sampler);
	Ok(script)
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
		}
		_ => false,
	}
}
