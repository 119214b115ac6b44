//! Enumerated option sets backing pool generation.
//!
//! Departments, diagnoses and units are positional catalogs: the entry at
//! index `i` always yields the same attribute tuple, so e.g. "Cardiology"
//! always pairs with the "Heart" speciality.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Margaret", "Steven", "Sandra",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Walker",
];

pub const STREET_NAMES: &[&str] = &[
    "Main Street",
    "Oak Avenue",
    "Maple Drive",
    "Cedar Lane",
    "Elm Street",
    "Washington Boulevard",
    "Park Avenue",
    "Lakeview Road",
    "Sunset Drive",
    "Hillcrest Avenue",
    "River Road",
    "Highland Drive",
];

/// City paired with its state.
pub const CITIES: &[(&str, &str)] = &[
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Philadelphia", "PA"),
    ("San Antonio", "TX"),
    ("San Diego", "CA"),
    ("Dallas", "TX"),
    ("Columbus", "OH"),
    ("Seattle", "WA"),
    ("Denver", "CO"),
    ("Boston", "MA"),
    ("Nashville", "TN"),
    ("Portland", "OR"),
];

pub const HOSPITAL_NAME_PREFIXES: &[&str] = &[
    "St. Mary's",
    "Riverside",
    "Mercy",
    "Lakeside",
    "Unity",
    "Summit",
    "Evergreen",
    "Northgate",
    "Harborview",
    "Pinecrest",
    "Westbrook",
    "Grandview",
];

pub const HOSPITAL_NAME_SUFFIXES: &[&str] = &[
    "Medical Center",
    "General Hospital",
    "Regional Hospital",
    "Health Center",
    "Community Hospital",
];

/// Department name paired with its speciality.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("Cardiology", "Heart"),
    ("Neurology", "Brain"),
    ("Orthopedics", "Bones"),
    ("Pediatrics", "Children"),
    ("Oncology", "Cancer"),
    ("Dermatology", "Skin"),
    ("Gastroenterology", "Digestive"),
    ("Radiology", "Imaging"),
    ("Urology", "Urinary"),
    ("Ophthalmology", "Eyes"),
];

/// Diagnosis code, description and category triples.
pub const DIAGNOSES: &[(&str, &str, &str)] = &[
    ("I10", "Essential hypertension", "Circulatory"),
    ("E11", "Type 2 diabetes mellitus", "Endocrine"),
    ("J45", "Asthma", "Respiratory"),
    ("K21", "Gastro-esophageal reflux disease", "Digestive"),
    ("M54", "Low back pain", "Musculoskeletal"),
    ("N39", "Urinary tract infection", "Genitourinary"),
    ("F32", "Major depressive disorder", "Mental"),
    ("G43", "Migraine", "Neurological"),
    ("L40", "Psoriasis", "Skin"),
    ("A09", "Infectious gastroenteritis", "Infectious"),
];

pub const INSURER_NAME_PREFIXES: &[&str] = &[
    "Blue", "United", "Global", "Prime", "Liberty", "Pacific", "Anchor", "Beacon", "Pioneer",
    "Keystone",
];

pub const INSURER_NAME_SUFFIXES: &[&str] = &["Health", "Care", "Assurance", "Shield"];

pub const ROOM_TYPES: &[&str] = &["General", "Private", "Semi-Private", "ICU"];

pub const UNIT_NAMES: &[&str] = &[
    "Inpatient",
    "Outpatient",
    "Emergency",
    "Surgical",
    "Maternity",
    "Rehabilitation",
];

/// Lowercase a full name into an email local part, dropping titles and
/// joining the remaining parts with dots ("Dr. Jane Smith" -> "jane.smith").
pub fn email_slug(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
