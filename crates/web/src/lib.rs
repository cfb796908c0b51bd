use h416_core::H416;
use wasm_bindgen::prelude::*;

/// Hex digest of `input`
#[wasm_bindgen]
pub fn digest_hex(input: &[u8]) -> String {
    h416_core::digest(input)
}

/// Raw 52-byte digest of `input`
#[wasm_bindgen]
pub fn hash_once(input: &[u8]) -> Vec<u8> {
    h416_core::hash(input).to_bytes().to_vec()
}

/// Hex digest of a JS string's UTF-8 bytes
#[wasm_bindgen]
pub fn digest_text(input: &str) -> String {
    h416_core::digest(input.as_bytes())
}

/// Streaming hasher for large inputs fed in chunks (e.g. from a `File` stream)
#[wasm_bindgen]
pub struct Hasher {
    inner: H416,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Hasher {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: H416::new() }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    /// Bytes absorbed so far (as f64, exact up to 2^53)
    pub fn length(&self) -> f64 {
        self.inner.len() as f64
    }

    /// Hex digest of everything absorbed so far; resets the hasher
    pub fn finalize(&mut self) -> String {
        self.inner.finalize_reset().to_hex()
    }
}

#[wasm_bindgen]
pub struct Benchmark {
    hasher: H416,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Benchmark {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            hasher: H416::new(),
        }
    }

    /// Run benchmark with specified number of hashes
    /// Returns hashrate in H/s, or 0 when no performance clock is available
    #[wasm_bindgen]
    pub fn run(&mut self, num_hashes: u32) -> f64 {
        let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
            web_sys::console::warn_1(&"h416: performance clock unavailable".into());
            return 0.0;
        };

        let start = performance.now();

        for i in 0..num_hashes {
            let input = format!("benchmark_input_{}", i);
            self.hasher.update(input.as_bytes());
            let _ = self.hasher.finalize_reset();
        }

        let end = performance.now();
        let elapsed_s = (end - start) / 1000.0;

        if elapsed_s <= 0.0 {
            return 0.0;
        }
        (num_hashes as f64) / elapsed_s
    }

    /// Get algorithm parameters as JSON string
    #[wasm_bindgen]
    pub fn get_params(&self) -> String {
        get_params()
    }
}

/// Algorithm parameters as a JSON string
#[wasm_bindgen]
pub fn get_params() -> String {
    format!(
        r#"{{"version": {}, "block_size": {}, "rounds": {}, "state_words": {}, "digest_bits": {}}}"#,
        h416_core::VERSION,
        h416_core::BLOCK_SIZE,
        h416_core::ROUNDS,
        h416_core::STATE_WORDS,
        h416_core::DIGEST_SIZE * 8
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_matches_digest_hex() {
        let mut hasher = Hasher::new();
        hasher.update(b"Hello, ");
        hasher.update(b"World!");
        assert_eq!(hasher.length(), 13.0);
        assert_eq!(hasher.finalize(), digest_hex(b"Hello, World!"));
        assert_eq!(hasher.length(), 0.0);
    }

    #[test]
    fn test_text_and_bytes_agree() {
        assert_eq!(digest_text("abc"), digest_hex(b"abc"));
        assert_eq!(hash_once(b"abc").len(), 52);
    }

    #[test]
    fn test_params_json() {
        let params = get_params();
        assert!(params.contains(r#""rounds": 240"#));
        assert!(params.contains(r#""digest_bits": 416"#));
    }
}
