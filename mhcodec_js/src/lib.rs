use mhcodec::{codec, text, Base, HashFunction, Multihash, MultihashError};
use wasm_bindgen::prelude::*;

fn js_error(e: MultihashError) -> JsError {
    JsError::new(&e.to_string())
}

#[wasm_bindgen]
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::default());
}

#[wasm_bindgen(js_name = DecodedMultihash)]
pub struct JsDecodedMultihash {
    code: u64,
    name: Option<String>,
    length: u64,
    digest: Vec<u8>,
}

#[wasm_bindgen(js_class = DecodedMultihash)]
impl JsDecodedMultihash {
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> u64 { self.code }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> Option<String> { self.name.clone() }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u64 { self.length }

    #[wasm_bindgen(getter)]
    pub fn digest(&self) -> js_sys::Uint8Array { js_sys::Uint8Array::from(self.digest.as_slice()) }
}

impl From<codec::DecodedMultihash> for JsDecodedMultihash {
    fn from(d: codec::DecodedMultihash) -> Self {
        JsDecodedMultihash {
            code: d.code,
            name: d.name.map(str::to_string),
            length: d.length,
            digest: d.digest,
        }
    }
}

#[wasm_bindgen]
pub fn encode(digest: &[u8], code: u64, length: Option<usize>) -> Result<Vec<u8>, JsError> {
    codec::encode(digest, code, length).map_err(js_error)
}

#[wasm_bindgen]
pub fn decode(bytes: &[u8]) -> Result<JsDecodedMultihash, JsError> {
    let decoded = codec::decode(bytes).map_err(js_error)?;
    log::debug!("decoded multihash code=0x{:x}", decoded.code);
    Ok(decoded.into())
}

/// Hashes `input` with the named function (e.g. `sha2-256`).
#[wasm_bindgen]
pub fn hash(input: &[u8], name: &str, length: Option<usize>) -> Result<Vec<u8>, JsError> {
    let function: HashFunction = name.parse().map_err(js_error)?;
    Ok(Multihash::hash(function, input, length).map_err(js_error)?.into_bytes())
}

#[wasm_bindgen(js_name = toMultibase)]
pub fn to_multibase(bytes: &[u8], base: &str) -> Result<String, JsError> {
    let base: Base = base.parse().map_err(js_error)?;
    Ok(text::to_multibase(base, bytes))
}

#[wasm_bindgen(js_name = fromMultibase)]
pub fn from_multibase(s: &str) -> Result<Vec<u8>, JsError> {
    let (_, bytes) = text::from_multibase(s).map_err(js_error)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn decode_sha256_vector() {
        let bytes = from_multibase("f120a3afa34fba2f3572ac56d").ok().unwrap();
        let decoded = decode(&bytes).ok().unwrap();
        assert_eq!(decoded.code(), 0x12);
        assert_eq!(decoded.name(), Some("sha2-256".to_string()));
        assert_eq!(decoded.length(), 10);
    }

    #[wasm_bindgen_test]
    fn hash_round_trip() {
        let mh = hash(b"multihash", "sha1", None).ok().unwrap();
        assert_eq!(
            to_multibase(&mh, "base16").ok().unwrap(),
            "f111488c2f11fb2ce392acb5b2986e640211c4690073e"
        );
    }
}
