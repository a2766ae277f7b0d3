//! # FitForm FFI
//!
//! Stable C ABI over the FitForm engine, consumed by the mobile application
//! shells. One shared implementation replaces the per-platform analyzer
//! copies; the shells keep only camera plumbing and presentation.
//!
//! # Conventions
//!
//! - The engine lives behind an opaque [`FitformHandle`] created by
//!   [`fitform_new`] and released by [`fitform_free`].
//! - Landmarks cross the boundary as a flat `[x0, y0, x1, y1, ...]` `f32`
//!   array; structured payloads (threshold tables in, feedback out) are
//!   UTF-8 JSON strings.
//! - Functions returning `int` use the `FITFORM_*` status codes below.
//!   Functions returning strings yield `NULL` on failure; every returned
//!   string must be released with [`fitform_string_free`].
//! - Every entry point catches panics: the engine never unwinds across the
//!   boundary.
//!
//! The handle serializes access internally, so the shells may call from
//! whichever thread delivers frames as long as calls are not interleaved
//! mid-frame.
//!
//! # Example (C)
//!
//! ```c
//! FitformHandle *engine = fitform_new();
//! fitform_set_exercise(engine, "squat");
//! fitform_set_difficulty(engine, "medium");
//! fitform_load_thresholds(engine, thresholds_json);
//!
//! char *feedback = fitform_analyze(engine, coords, 66);
//! // ... parse feedback JSON ...
//! fitform_string_free(feedback);
//! fitform_free(engine);
//! ```

use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

use parking_lot::Mutex;

use fitform_core::{Difficulty, PoseFrame, ThresholdTable};
use fitform_engine::ExerciseAnalyzer;

/// Call completed.
pub const FITFORM_OK: c_int = 0;
/// A required pointer was null.
pub const FITFORM_ERR_NULL: c_int = -1;
/// A string argument was not valid UTF-8.
pub const FITFORM_ERR_UTF8: c_int = -2;
/// An argument was rejected (unknown difficulty, malformed configuration).
pub const FITFORM_ERR_INVALID: c_int = -3;
/// The engine panicked; the handle is still usable.
pub const FITFORM_ERR_PANIC: c_int = -4;

/// Opaque engine handle.
pub struct FitformHandle {
    inner: Mutex<ExerciseAnalyzer>,
}

/// Creates a new engine handle.
///
/// The returned pointer is owned by the caller and must be released with
/// [`fitform_free`].
#[no_mangle]
pub extern "C" fn fitform_new() -> *mut FitformHandle {
    let handle = Box::new(FitformHandle {
        inner: Mutex::new(ExerciseAnalyzer::new()),
    });
    Box::into_raw(handle)
}

/// Releases an engine handle. Passing `NULL` is a no-op.
///
/// # Safety
///
/// `handle` must be a pointer returned by [`fitform_new`] that has not been
/// freed already.
#[no_mangle]
pub unsafe extern "C" fn fitform_free(handle: *mut FitformHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Selects the active exercise by id and fully resets the session.
///
/// Unknown ids are accepted; the session stays inert until a supported id is
/// selected (mirroring the engine contract).
///
/// # Safety
///
/// `handle` must be a live handle from [`fitform_new`]; `id` must be a valid
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn fitform_set_exercise(
    handle: *mut FitformHandle,
    id: *const c_char,
) -> c_int {
    let Some(handle) = handle.as_ref() else {
        return FITFORM_ERR_NULL;
    };
    let Some(id) = cstr_to_str(id) else {
        return FITFORM_ERR_UTF8;
    };
    guarded(|| {
        handle.inner.lock().set_exercise(id);
        FITFORM_OK
    })
}

/// Selects the difficulty level (`"easy"`, `"medium"` or `"hard"`). The
/// session is kept.
///
/// # Safety
///
/// Same contract as [`fitform_set_exercise`].
#[no_mangle]
pub unsafe extern "C" fn fitform_set_difficulty(
    handle: *mut FitformHandle,
    level: *const c_char,
) -> c_int {
    let Some(handle) = handle.as_ref() else {
        return FITFORM_ERR_NULL;
    };
    let Some(level) = cstr_to_str(level) else {
        return FITFORM_ERR_UTF8;
    };
    let Some(difficulty) = Difficulty::from_name(level) else {
        return FITFORM_ERR_INVALID;
    };
    guarded(|| {
        handle.inner.lock().set_difficulty(difficulty);
        FITFORM_OK
    })
}

/// Replaces the threshold table from a JSON document.
///
/// Malformed entries inside a well-formed document are skipped; only an
/// unparseable document is rejected, in which case the previous table stays
/// in effect.
///
/// # Safety
///
/// Same contract as [`fitform_set_exercise`].
#[no_mangle]
pub unsafe extern "C" fn fitform_load_thresholds(
    handle: *mut FitformHandle,
    json: *const c_char,
) -> c_int {
    let Some(handle) = handle.as_ref() else {
        return FITFORM_ERR_NULL;
    };
    let Some(json) = cstr_to_str(json) else {
        return FITFORM_ERR_UTF8;
    };
    guarded(|| match ThresholdTable::from_json_str(json) {
        Ok(table) => {
            handle.inner.lock().load_thresholds(table);
            FITFORM_OK
        }
        Err(err) => {
            tracing::warn!(error = %err, "threshold document rejected");
            FITFORM_ERR_INVALID
        }
    })
}

/// Clears session state without touching exercise, difficulty or thresholds.
///
/// # Safety
///
/// `handle` must be a live handle from [`fitform_new`].
#[no_mangle]
pub unsafe extern "C" fn fitform_reset(handle: *mut FitformHandle) -> c_int {
    let Some(handle) = handle.as_ref() else {
        return FITFORM_ERR_NULL;
    };
    guarded(|| {
        handle.inner.lock().reset();
        FITFORM_OK
    })
}

/// Analyzes one landmark frame.
///
/// `coords` points at `coord_count` floats laid out `[x0, y0, x1, y1, ...]`
/// (66 values for a complete 33-landmark frame). Returns the feedback record
/// as a JSON string
/// `{"is_correct": bool, "message": str, "rep_count": int, "correct_rep_count": int}`,
/// or `NULL` on misuse (null/odd-length input). Short frames are not
/// misuse: they produce a normal "cannot detect pose" feedback record.
///
/// # Safety
///
/// `handle` must be a live handle from [`fitform_new`]; `coords` must point
/// at at least `coord_count` readable floats.
#[no_mangle]
pub unsafe extern "C" fn fitform_analyze(
    handle: *mut FitformHandle,
    coords: *const f32,
    coord_count: usize,
) -> *mut c_char {
    let Some(handle) = handle.as_ref() else {
        return std::ptr::null_mut();
    };
    if coords.is_null() {
        return std::ptr::null_mut();
    }
    let coords = std::slice::from_raw_parts(coords, coord_count);

    guarded_ptr(|| {
        let Ok(frame) = PoseFrame::from_flat(coords) else {
            return std::ptr::null_mut();
        };
        let feedback = handle.inner.lock().analyze(&frame);
        match serde_json::to_string(&feedback) {
            Ok(json) => into_c_string(json),
            Err(_) => std::ptr::null_mut(),
        }
    })
}

/// Ids of every supported exercise, as a JSON string array.
///
/// Release the result with [`fitform_string_free`].
#[no_mangle]
pub extern "C" fn fitform_available_exercises() -> *mut c_char {
    guarded_ptr(|| {
        match serde_json::to_string(&ExerciseAnalyzer::available_exercises()) {
            Ok(json) => into_c_string(json),
            Err(_) => std::ptr::null_mut(),
        }
    })
}

/// Supported difficulty names, as a JSON string array.
///
/// Release the result with [`fitform_string_free`].
#[no_mangle]
pub extern "C" fn fitform_available_difficulties() -> *mut c_char {
    guarded_ptr(|| {
        let names: Vec<&str> = ExerciseAnalyzer::available_difficulties()
            .iter()
            .map(Difficulty::name)
            .collect();
        match serde_json::to_string(&names) {
            Ok(json) => into_c_string(json),
            Err(_) => std::ptr::null_mut(),
        }
    })
}

/// The engine version string. Release with [`fitform_string_free`].
#[no_mangle]
pub extern "C" fn fitform_version() -> *mut c_char {
    into_c_string(fitform_engine::VERSION.to_string())
}

/// Releases a string returned by this library. Passing `NULL` is a no-op.
///
/// # Safety
///
/// `s` must be a pointer returned by one of this library's functions that
/// has not been freed already.
#[no_mangle]
pub unsafe extern "C" fn fitform_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

fn guarded(f: impl FnOnce() -> c_int) -> c_int {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or(FITFORM_ERR_PANIC)
}

fn guarded_ptr(f: impl FnOnce() -> *mut c_char) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or(std::ptr::null_mut())
}

/// # Safety
///
/// `s` must be null or point at a NUL-terminated string.
unsafe fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    // JSON output never contains interior NULs; fall back to null rather
    // than unwinding if that assumption is ever violated.
    CString::new(s).map_or(std::ptr::null_mut(), CString::into_raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let out = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        fitform_string_free(ptr);
        out
    }

    #[test]
    fn lifecycle_and_status_codes() {
        unsafe {
            let handle = fitform_new();
            assert!(!handle.is_null());

            assert_eq!(fitform_set_exercise(handle, c("squat").as_ptr()), FITFORM_OK);
            assert_eq!(
                fitform_set_difficulty(handle, c("hard").as_ptr()),
                FITFORM_OK
            );
            assert_eq!(
                fitform_set_difficulty(handle, c("impossible").as_ptr()),
                FITFORM_ERR_INVALID
            );
            assert_eq!(fitform_reset(handle), FITFORM_OK);

            fitform_free(handle);
        }
    }

    #[test]
    fn null_handles_are_rejected() {
        unsafe {
            assert_eq!(
                fitform_set_exercise(std::ptr::null_mut(), c("squat").as_ptr()),
                FITFORM_ERR_NULL
            );
            assert_eq!(fitform_reset(std::ptr::null_mut()), FITFORM_ERR_NULL);
            assert!(fitform_analyze(std::ptr::null_mut(), std::ptr::null(), 0).is_null());
        }
    }

    #[test]
    fn analyze_returns_feedback_json() {
        unsafe {
            let handle = fitform_new();
            fitform_set_exercise(handle, c("squat").as_ptr());

            // A short frame is a normal rejection, not an FFI error.
            let coords = [0.0_f32; 20];
            let json = take_string(fitform_analyze(handle, coords.as_ptr(), coords.len()));
            assert!(json.contains("\"is_correct\":false"));
            assert!(json.contains("Cannot detect pose"));

            // A complete frame with aligned hips analyzes normally.
            let mut coords = [0.0_f32; 66];
            coords[23 * 2] = 318.0; // left hip x
            coords[24 * 2] = 320.0; // right hip x
            let json = take_string(fitform_analyze(handle, coords.as_ptr(), coords.len()));
            assert!(json.contains("\"rep_count\":0"));

            fitform_free(handle);
        }
    }

    #[test]
    fn odd_coordinate_count_is_misuse() {
        unsafe {
            let handle = fitform_new();
            let coords = [0.0_f32; 7];
            assert!(fitform_analyze(handle, coords.as_ptr(), coords.len()).is_null());
            fitform_free(handle);
        }
    }

    #[test]
    fn thresholds_round_trip() {
        unsafe {
            let handle = fitform_new();
            let doc = c(r#"{"squat": {"medium": [{"knee_angle_min": 30.0}]}}"#);
            assert_eq!(fitform_load_thresholds(handle, doc.as_ptr()), FITFORM_OK);

            let bad = c("[not an object]");
            assert_eq!(
                fitform_load_thresholds(handle, bad.as_ptr()),
                FITFORM_ERR_INVALID
            );
            fitform_free(handle);
        }
    }

    #[test]
    fn catalog_is_exposed() {
        unsafe {
            let json = take_string(fitform_available_exercises());
            assert!(json.contains("\"squat\""));
            assert!(json.contains("\"side_bridge\""));

            let json = take_string(fitform_available_difficulties());
            assert!(json.contains("\"easy\""));

            let version = take_string(fitform_version());
            assert!(!version.is_empty());
        }
    }
}
