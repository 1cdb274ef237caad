// LandSearch - util/locale.rs
//
// User-facing text. The application ships a single fixed locale (Marathi);
// every label, notice, and the CSV header row comes from here.

// =============================================================================
// Field labels (also the CSV header, in column order)
// =============================================================================

pub const LABEL_INDEX: &str = "अ.क्र.";
pub const LABEL_TALUKA: &str = "तालुका";
pub const LABEL_VILLAGE: &str = "गाव";
pub const LABEL_HOLDER_NAME: &str = "रेखांकन धारकाचे नाव";
pub const LABEL_YEAR: &str = "रेखांकन वर्ष";
pub const LABEL_SURVEY_NO: &str = "सर्व्हे क्रमांक";
pub const LABEL_TYPE: &str = "बिनशेती प्रकार";
pub const LABEL_DOWNLOAD_LINK: &str = "डाउनलोड लिंक";

/// CSV header labels in export column order.
pub const CSV_HEADER: [&str; 8] = [
    LABEL_INDEX,
    LABEL_TALUKA,
    LABEL_VILLAGE,
    LABEL_HOLDER_NAME,
    LABEL_YEAR,
    LABEL_SURVEY_NO,
    LABEL_TYPE,
    LABEL_DOWNLOAD_LINK,
];

// =============================================================================
// Notifications
// =============================================================================

pub const LOAD_SUCCESS: &str = "डेटा यशस्वीरित्या लोड झाला";
pub const LOAD_FAILURE_PREFIX: &str = "डेटा लोड करण्यात अयशस्वी: ";
pub const SEARCH_FAILURE: &str = "शोध प्रक्रिया अयशस्वी झाली. कृपया पुन्हा प्रयत्न करा.";
pub const EXPORT_NO_RESULTS: &str = "डाउनलोड करण्यासाठी कोणतेही परिणाम नाहीत.";
pub const EXPORT_SUCCESS: &str = "CSV फाइल यशस्वीरित्या डाउनलोड झाली";
pub const EXPORT_FAILURE_PREFIX: &str = "CSV फाइल तयार करण्यात अयशस्वी: ";

/// "<n> records found".
pub fn records_found(count: usize) -> String {
    format!("{count} नोंदी सापडल्या")
}

// =============================================================================
// Controls
// =============================================================================

pub const SEARCH_HEADING: &str = "जमीन नोंदी शोधा";
pub const SEARCH_BUTTON: &str = "शोधा";
pub const RESET_BUTTON: &str = "रीसेट";
pub const ANY_OPTION: &str = "सर्व";
pub const DOWNLOAD_BUTTON: &str = "डाउनलोड";
pub const EXPORT_BUTTON: &str = "CSV डाउनलोड";
pub const CLOSE_BUTTON: &str = "बंद करा";
pub const OPEN_IN_BROWSER: &str = "ब्राउझरमध्ये उघडा";
pub const NO_RESULTS: &str = "कोणतेही परिणाम सापडले नाहीत. कृपया शोध निकष बदला.";
pub const LOADING: &str = "डेटा लोड होत आहे...";
pub const SEARCHING: &str = "शोध सुरू आहे...";
pub const NOT_LOADED: &str = "डेटा लोड झालेला नाही. फाइल \u{2192} डेटा फाइल उघडा.";

// =============================================================================
// Menu
// =============================================================================

pub const MENU_FILE: &str = "फाइल";
pub const MENU_OPEN_DATA: &str = "डेटा फाइल उघडा\u{2026}";
pub const MENU_RELOAD: &str = "डेटा पुन्हा लोड करा";
pub const MENU_EXPORT: &str = "CSV निर्यात करा\u{2026}";
pub const MENU_EXIT: &str = "बाहेर पडा";
pub const MENU_HELP: &str = "मदत";
pub const MENU_ABOUT: &str = "माहिती";

// =============================================================================
// Statistics strip
// =============================================================================

pub const STAT_TOTAL_RECORDS: &str = "एकूण नोंदी";
pub const STAT_TALUKAS: &str = "तालुके";
pub const STAT_VILLAGES: &str = "गावे";
pub const STAT_START_YEAR: &str = "पासून";
