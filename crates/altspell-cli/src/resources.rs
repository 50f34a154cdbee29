// Resource discovery and loading: language mappings and dictionaries
//
// Layout of a resource directory:
//
//   languages.json            { "<iso 639-1 code>": { "<native>": "<alternative>" } }
//   dicts/<code>.txt          line-delimited word list, case-exact
//   dicts/filtered/<code>.txt derived cache: only words with native characters

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use hashbrown::HashMap;
use serde_json::Value;
use tracing::{debug, warn};

use altspell_core::lookup::Dictionary;
use altspell_core::mapping::{LanguageMapping, MappingError};

/// Language table file name.
pub const LANGUAGES_FILE: &str = "languages.json";

/// Dictionary directory within the resource directory.
const DICTS_SUBDIR: &str = "dicts";

/// Filtered-dictionary cache directory within the dictionary directory.
const FILTERED_SUBDIR: &str = "filtered";

/// Environment variable naming a resource directory.
pub const RESOURCES_ENV: &str = "ALTSPELL_RESOURCES";

/// Resource directory shipped with the workspace.
pub const BUNDLED_RESOURCES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources");

/// Error type for resource discovery and loading.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// No directory with a language table was found.
    #[error("could not find languages.json in any of the search paths:\n{0}")]
    NotFound(String),

    /// The language code has no mapping.
    #[error("unknown language {language:?} (available: {available})")]
    UnknownLanguage { language: String, available: String },

    /// The language has a mapping but no dictionary.
    #[error("dictionary for language {language:?} not available (looked for {})", .path.display())]
    DictionaryNotFound { language: String, path: PathBuf },

    /// A mapping entry is not a single character mapped to a non-empty string.
    #[error("malformed mapping for language {language:?}: {source}")]
    MalformedMapping {
        language: String,
        #[source]
        source: MappingError,
    },

    /// The language table does not have the expected shape.
    #[error("invalid language table: {0}")]
    InvalidLanguageTable(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// Build the list of directories to search for resources.
///
/// Search order:
/// 1. `explicit` argument (if provided)
/// 2. `ALTSPELL_RESOURCES` environment variable
/// 3. `~/.altspell`
/// 4. `/usr/share/altspell`
/// 5. the workspace's bundled `resources/`
/// 6. `./resources` in the current directory
pub fn build_search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(RESOURCES_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".altspell"));
    }

    paths.push(PathBuf::from("/usr/share/altspell"));
    paths.push(PathBuf::from(BUNDLED_RESOURCES));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("resources"));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Find the first directory containing a language table.
///
/// An explicitly given directory must contain it; it is not skipped in
/// favour of later search paths.
pub fn find_resource_dir(explicit: Option<&Path>) -> Result<PathBuf, ResourceError> {
    if let Some(dir) = explicit {
        if dir.join(LANGUAGES_FILE).is_file() {
            return Ok(dir.to_path_buf());
        }
        return Err(ResourceError::NotFound(format!("  - {}", dir.display())));
    }

    let search_paths = build_search_paths(None);
    search_paths
        .iter()
        .find(|dir| dir.join(LANGUAGES_FILE).is_file())
        .cloned()
        .ok_or_else(|| {
            ResourceError::NotFound(
                search_paths
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        })
}

// ---------------------------------------------------------------------------
// Language table
// ---------------------------------------------------------------------------

/// Recursively lowercase every object key and string value.
///
/// `str::to_lowercase` keeps 'ß' as it is, so native-letter keys survive
/// (full case folding would turn 'ß' into "ss").
pub fn lowercase_all(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_all).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lowercase_all(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Parse a language table into one mapping per language code.
pub fn parse_language_table(json: &str) -> Result<BTreeMap<String, LanguageMapping>, ResourceError> {
    let value: Value = serde_json::from_str(json).map_err(|source| ResourceError::Json {
        path: PathBuf::from(LANGUAGES_FILE),
        source,
    })?;
    let table: BTreeMap<String, BTreeMap<String, String>> =
        serde_json::from_value(lowercase_all(value))
            .map_err(|e| ResourceError::InvalidLanguageTable(e.to_string()))?;

    table
        .into_iter()
        .map(|(language, pairs)| {
            let mapping = LanguageMapping::try_from_pairs(pairs).map_err(|source| {
                ResourceError::MalformedMapping {
                    language: language.clone(),
                    source,
                }
            })?;
            Ok((language, mapping))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Loads mappings and dictionaries from one resource directory.
///
/// The language table is parsed once on open; each dictionary is read at
/// most once per loader.
#[derive(Debug)]
pub struct ResourceLoader {
    root: PathBuf,
    use_filtered_cache: bool,
    mappings: BTreeMap<String, LanguageMapping>,
    dictionaries: RefCell<HashMap<String, Rc<Dictionary>>>,
}

impl ResourceLoader {
    /// Open a resource directory and parse its language table.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ResourceError> {
        let root = root.into();
        let path = root.join(LANGUAGES_FILE);
        let json = read_to_string(&path)?;
        let mappings = parse_language_table(&json).map_err(|e| match e {
            ResourceError::Json { source, .. } => ResourceError::Json {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        debug!(root = %root.display(), languages = mappings.len(), "opened resources");
        Ok(Self {
            root,
            use_filtered_cache: true,
            mappings,
            dictionaries: RefCell::new(HashMap::new()),
        })
    }

    /// Find a resource directory (see [`find_resource_dir`]) and open it.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ResourceError> {
        Self::open(find_resource_dir(explicit)?)
    }

    /// Enable or disable reading and writing the filtered dictionary cache.
    pub fn with_filtered_cache(mut self, enabled: bool) -> Self {
        self.use_filtered_cache = enabled;
        self
    }

    /// Available language codes, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    /// Mapping of a language.
    pub fn mapping(&self, language: &str) -> Result<&LanguageMapping, ResourceError> {
        self.mappings
            .get(language)
            .ok_or_else(|| ResourceError::UnknownLanguage {
                language: language.to_string(),
                available: self.languages().collect::<Vec<_>>().join(", "),
            })
    }

    /// Path of a language's full dictionary.
    pub fn dictionary_path(&self, language: &str) -> PathBuf {
        self.root.join(DICTS_SUBDIR).join(format!("{language}.txt"))
    }

    /// Path of a language's filtered dictionary cache.
    pub fn filtered_dictionary_path(&self, language: &str) -> PathBuf {
        self.root
            .join(DICTS_SUBDIR)
            .join(FILTERED_SUBDIR)
            .join(format!("{language}.txt"))
    }

    /// Dictionary of a language, loaded on first use.
    ///
    /// With the filtered cache enabled, an up-to-date cache file is read
    /// instead of the full dictionary; a missing or stale one is rebuilt
    /// from the full dictionary and written back.
    pub fn dictionary(&self, language: &str) -> Result<Rc<Dictionary>, ResourceError> {
        if let Some(dict) = self.dictionaries.borrow().get(language) {
            return Ok(Rc::clone(dict));
        }

        let mapping = self.mapping(language)?;
        let full_path = self.dictionary_path(language);
        if !full_path.is_file() {
            return Err(ResourceError::DictionaryNotFound {
                language: language.to_string(),
                path: full_path,
            });
        }

        let dict = if self.use_filtered_cache {
            self.load_filtered(&full_path, language, mapping)?
        } else {
            Dictionary::from_lines(&read_to_string(&full_path)?)
        };
        debug!(language, words = dict.len(), "loaded dictionary");

        let dict = Rc::new(dict);
        self.dictionaries
            .borrow_mut()
            .insert(language.to_string(), Rc::clone(&dict));
        Ok(dict)
    }

    fn load_filtered(
        &self,
        full_path: &Path,
        language: &str,
        mapping: &LanguageMapping,
    ) -> Result<Dictionary, ResourceError> {
        let cache_path = self.filtered_dictionary_path(language);
        let table_path = self.root.join(LANGUAGES_FILE);
        if is_fresh(&cache_path, &[full_path, &table_path]) {
            debug!(path = %cache_path.display(), "found filtered dictionary");
            return Ok(Dictionary::from_lines(&read_to_string(&cache_path)?));
        }

        debug!(path = %cache_path.display(), "no usable filtered dictionary, creating from full one");
        let filtered = Dictionary::from_lines(&read_to_string(full_path)?).retain_native(mapping);
        if let Err(e) = write_lines(&cache_path, &filtered.sorted()) {
            warn!(path = %cache_path.display(), error = %e, "could not write filtered dictionary");
        }
        Ok(filtered)
    }
}

/// Whether `cache` exists and is not older than any of `sources`.
///
/// The cache depends on the full dictionary and on the language table
/// (which native characters are kept). Sources without a readable mtime
/// are ignored.
fn is_fresh(cache: &Path, sources: &[&Path]) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified());
    let Ok(cache_time) = modified(cache) else {
        return false;
    };
    sources
        .iter()
        .filter_map(|source| modified(source).ok())
        .all(|source_time| cache_time >= source_time)
}

fn read_to_string(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `lines` to `path` through a temporary file in the same directory,
/// renamed into place once complete. Readers see the old file or the new
/// one, never a partial write.
fn write_lines(path: &Path, lines: &[&str]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(lines.join("\n").as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
