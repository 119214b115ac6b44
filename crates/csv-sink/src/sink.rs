//! CSV record sink with write metrics.

use crate::error::SinkError;
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use synth_core::{RecordSink, VisitRecord};
use tracing::debug;

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a completed write.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Wall time from sink creation to finish.
    pub elapsed: Duration,
}

impl WriteMetrics {
    pub fn rows_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// The canonical column order shared by the sample and bulk extracts.
///
/// Embedded entities are flattened with a per-entity prefix, which keeps
/// every column name unique.
pub fn csv_header() -> Vec<&'static str> {
    vec![
        "visit_id",
        "visit_date",
        "patient_id",
        "patient_name",
        "patient_gender",
        "patient_dob",
        "patient_age",
        "patient_blood_group",
        "patient_satisfaction_score",
        "patient_street",
        "patient_city",
        "patient_state",
        "patient_country",
        "patient_postal_code",
        "doctor_id",
        "doctor_name",
        "doctor_specialization",
        "doctor_contact_number",
        "doctor_years_experience",
        "doctor_email",
        "doctor_shift_preference",
        "doctor_hospital_id",
        "doctor_department_id",
        "hospital_id",
        "hospital_name",
        "hospital_type",
        "hospital_accreditation",
        "hospital_bed_capacity",
        "hospital_street",
        "hospital_city",
        "hospital_state",
        "hospital_country",
        "hospital_postal_code",
        "department_id",
        "department_name",
        "department_speciality",
        "diagnosis_id",
        "diagnosis_code",
        "diagnosis_description",
        "diagnosis_category",
        "insurer_id",
        "insurer_name",
        "insurer_plan_type",
        "insurer_coverage_percent",
        "insurer_contact_number",
        "insurer_email",
        "shift_id",
        "shift_name",
        "shift_start_time",
        "shift_end_time",
        "referral_type",
        "wait_time_minutes",
        "billing_amount",
        "insurance_covered_amount",
        "patient_covered_amount",
        "room_id",
        "room_number",
        "room_type",
        "room_floor",
        "unit_id",
        "unit_name",
    ]
}

/// Flatten one record into CSV fields, in [`csv_header`] order.
pub fn record_to_fields(record: &VisitRecord) -> Vec<String> {
    vec![
        record.visit_id.clone(),
        record.visit_date.format("%Y-%m-%d").to_string(),
        record.patient.id.clone(),
        record.patient.full_name.clone(),
        record.patient.gender.as_str().to_string(),
        record.patient.dob.format("%Y-%m-%d").to_string(),
        record.age.to_string(),
        record.patient.blood_group.as_str().to_string(),
        format!("{:.1}", record.patient.satisfaction_score),
        record.patient.address.street.clone(),
        record.patient.address.city.clone(),
        record.patient.address.state.clone(),
        record.patient.address.country.clone(),
        record.patient.address.postal_code.clone(),
        record.doctor.id.clone(),
        record.doctor.full_name.clone(),
        record.doctor.specialization.clone(),
        record.doctor.contact_number.clone(),
        record.doctor.years_experience.to_string(),
        record.doctor.email.clone(),
        record.doctor.shift_preference.as_str().to_string(),
        record.doctor.hospital_id.clone(),
        record.doctor.department_id.clone(),
        record.hospital.id.clone(),
        record.hospital.name.clone(),
        record.hospital.hospital_type.as_str().to_string(),
        record.hospital.accreditation.as_str().to_string(),
        record.hospital.bed_capacity.to_string(),
        record.hospital.address.street.clone(),
        record.hospital.address.city.clone(),
        record.hospital.address.state.clone(),
        record.hospital.address.country.clone(),
        record.hospital.address.postal_code.clone(),
        record.department.id.clone(),
        record.department.name.clone(),
        record.department.speciality.clone(),
        record.diagnosis.id.clone(),
        record.diagnosis.code.clone(),
        record.diagnosis.description.clone(),
        record.diagnosis.category.clone(),
        record.insurer.id.clone(),
        record.insurer.name.clone(),
        record.insurer.plan_type.as_str().to_string(),
        record.insurer.coverage_percent.to_string(),
        record.insurer.contact_number.clone(),
        record.insurer.email.clone(),
        record.shift.id.clone(),
        record.shift.name.as_str().to_string(),
        record.shift.start_time.clone(),
        record.shift.end_time.clone(),
        record.referral.as_str().to_string(),
        record.wait_time_minutes.to_string(),
        record.billing_amount.to_string(),
        record.insurance_covered.to_string(),
        record.patient_covered.to_string(),
        record.room_id.clone(),
        record.room_number.to_string(),
        record.room_type.clone(),
        record.room_floor.to_string(),
        record.unit_id.clone(),
        record.unit_name.clone(),
    ]
}

/// CSV sink over a buffered file. The header is written exactly once, at
/// creation.
pub struct CsvSink {
    writer: Writer<BufWriter<File>>,
    path: PathBuf,
    rows_written: u64,
    started: Instant,
    metrics: Option<WriteMetrics>,
}

impl CsvSink {
    /// Create the output file and write the canonical header row.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);
        writer.write_record(csv_header())?;

        Ok(Self {
            writer,
            path,
            rows_written: 0,
            started: Instant::now(),
            metrics: None,
        })
    }

    fn write_batch(&mut self, batch: &[VisitRecord]) -> Result<(), SinkError> {
        for record in batch {
            self.writer.write_record(record_to_fields(record))?;
            self.rows_written += 1;

            if self.rows_written % 10000 == 0 {
                debug!("Written {} rows to {}", self.rows_written, self.path.display());
            }
        }
        // Flush per batch so every appended chunk is durable on disk;
        // interruption between appends never leaves a partial row behind
        self.writer.flush()?;
        Ok(())
    }

    fn flush_and_measure(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        self.metrics = Some(WriteMetrics {
            rows_written: self.rows_written,
            file_size_bytes: std::fs::metadata(&self.path)?.len(),
            elapsed: self.started.elapsed(),
        });
        Ok(())
    }

    /// Write metrics, available once `finish` has run.
    pub fn metrics(&self) -> Option<&WriteMetrics> {
        self.metrics.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvSink {
    fn append(&mut self, batch: &[VisitRecord]) -> anyhow::Result<()> {
        self.write_batch(batch)?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush_and_measure()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use synth_core::records::AccreditationLevel;
    use synth_core::{
        Address, BloodGroup, DepartmentRecord, DiagnosisRecord, DoctorRecord, Gender,
        HospitalRecord, HospitalType, InsurerRecord, PatientIdentity, PlanType, ReferralType,
        ShiftRecord, ShiftType,
    };
    use tempfile::TempDir;

    fn test_address() -> Address {
        Address {
            street: "123 Main Street".to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            country: "USA".to_string(),
            postal_code: "02101".to_string(),
        }
    }

    fn test_record() -> VisitRecord {
        VisitRecord {
            visit_id: "VIS-0000001".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            patient: PatientIdentity {
                id: "PT-E0000001".to_string(),
                full_name: "Mary Jones".to_string(),
                gender: Gender::Female,
                dob: NaiveDate::from_ymd_opt(1980, 7, 2).unwrap(),
                address: test_address(),
                satisfaction_score: 4.5,
                blood_group: BloodGroup::OPositive,
            },
            age: 44,
            doctor: DoctorRecord {
                id: "DOC-001".to_string(),
                full_name: "Dr. James Smith".to_string(),
                specialization: "Cardiology".to_string(),
                contact_number: "+1-555-201-3344".to_string(),
                years_experience: 12,
                email: "james.smith@hospital.example.com".to_string(),
                shift_preference: ShiftType::Morning,
                hospital_id: "HOSP-02".to_string(),
                department_id: "DEPT-03".to_string(),
            },
            hospital: HospitalRecord {
                id: "HOSP-01".to_string(),
                name: "Riverside Medical Center".to_string(),
                hospital_type: HospitalType::General,
                accreditation: AccreditationLevel::A,
                bed_capacity: 300,
                address: test_address(),
            },
            department: DepartmentRecord {
                id: "DEPT-01".to_string(),
                name: "Cardiology".to_string(),
                speciality: "Heart".to_string(),
            },
            diagnosis: DiagnosisRecord {
                id: "DIAG-01".to_string(),
                code: "I10".to_string(),
                description: "Essential hypertension".to_string(),
                category: "Circulatory".to_string(),
            },
            insurer: InsurerRecord {
                id: "INS-01".to_string(),
                name: "Blue Shield".to_string(),
                plan_type: PlanType::Gold,
                coverage_percent: 75,
                contact_number: "+1-555-800-9000".to_string(),
                email: "contact@blue-shield.example.com".to_string(),
            },
            shift: ShiftRecord {
                id: "SH-1".to_string(),
                name: ShiftType::Morning,
                start_time: "06:00".to_string(),
                end_time: "14:00".to_string(),
            },
            referral: ReferralType::Physician,
            wait_time_minutes: 35,
            billing_amount: 20000,
            insurance_covered: 15000,
            patient_covered: 5000,
            room_id: "RM-1234".to_string(),
            room_number: 412,
            room_type: "Private".to_string(),
            room_floor: 4,
            unit_id: "UNIT-01".to_string(),
            unit_name: "Inpatient".to_string(),
        }
    }

    #[test]
    fn test_fields_match_header_length() {
        assert_eq!(record_to_fields(&test_record()).len(), csv_header().len());
    }

    #[test]
    fn test_field_formatting() {
        let fields = record_to_fields(&test_record());
        assert_eq!(fields[0], "VIS-0000001");
        assert_eq!(fields[1], "2025-03-14");
        assert_eq!(fields[4], "F");
        assert_eq!(fields[8], "4.5");
        assert_eq!(fields[50], "Physician");
    }

    #[test]
    fn test_header_written_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut sink = CsvSink::create(&path).unwrap();
        let record = test_record();
        sink.append(&[record.clone(), record.clone()]).unwrap();
        sink.append(&[record]).unwrap();
        sink.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4); // 1 header + 3 data rows
        assert!(lines[0].starts_with("visit_id,visit_date,patient_id"));
        assert_eq!(
            content.matches("visit_id,visit_date").count(),
            1,
            "header must appear exactly once"
        );

        let metrics = sink.metrics().unwrap();
        assert_eq!(metrics.rows_written, 3);
        assert!(metrics.file_size_bytes > 0);
    }

    #[test]
    fn test_appended_batch_is_durable_before_finish() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut sink = CsvSink::create(&path).unwrap();
        let record = test_record();
        sink.append(&[record.clone(), record.clone(), record]).unwrap();

        // Read back without calling finish: the flushed chunk must be
        // complete on disk, with no truncated trailing row
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4); // 1 header + 3 data rows
        assert!(content.ends_with('\n'));

        let field_count = csv_header().len();
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), field_count);
        }
    }
}
