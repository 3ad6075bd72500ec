use crate::infra::{InMemoryCredentialRegistry, RecordingRegistrationSink};
use clap::Args;
use ivtc_campus::error::AppError;
use ivtc_campus::workflows::registration::{
    IntakePolicy, RegistrationDraft, RegistrationField, RegistrationPathway, RegistrationService,
    RegistrationServiceError,
};
use ivtc_campus::workflows::verification::{LookupQueryState, VerificationSession};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct VerifyArgs {
    /// Certificate reference to look up, e.g. IVTC-2026-X89
    pub(crate) reference: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Require school and exam year for the exam-prep pathway
    #[arg(long)]
    pub(crate) require_exam_details: bool,
    /// Skip the registration intake portion of the demo
    #[arg(long)]
    pub(crate) skip_registration: bool,
}

pub(crate) fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let registry = InMemoryCredentialRegistry::seeded();
    let mut session = VerificationSession::new();
    render_lookup(session.submit_query(&args.reference, &registry));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Credential verification demo");
    let registry = InMemoryCredentialRegistry::seeded();
    let mut session = VerificationSession::new();

    println!("- Submitting reference 'ivtc-2026-x89' (lowercase on purpose)");
    render_lookup(session.submit_query("ivtc-2026-x89", &registry));

    println!("- Submitting reference 'BOGUS-000'");
    render_lookup(session.submit_query("BOGUS-000", &registry));
    session.reset();
    println!("  Session reset -> {}", session.state().label());

    if args.skip_registration {
        return Ok(());
    }

    println!("\nRegistration intake demo");
    let sink = Arc::new(RecordingRegistrationSink::default());
    let policy = IntakePolicy::new(args.require_exam_details);
    let service = RegistrationService::new(sink.clone(), policy);

    let mut draft = RegistrationDraft::new(RegistrationPathway::ProfessionalCourse);
    draft.set(RegistrationField::Program, "Cyber Security");
    draft.set(RegistrationField::FullName, "Dulaj Nimansha");
    draft.set(RegistrationField::NationalId, "200134501234");
    draft.set(RegistrationField::DateOfBirth, "2004-06-12");
    draft.set(RegistrationField::Gender, "Male");
    draft.set(RegistrationField::Phone, "+94 71 234 5678");
    draft.set(RegistrationField::AddressLine1, "12 Temple Road");
    draft.set(RegistrationField::City, "Dehiwala");
    draft.set(RegistrationField::District, "Colombo");
    draft.set(RegistrationField::PostalCode, "10350");

    println!("- Switching pathway to {}", RegistrationPathway::ExamPrep.title());
    draft.select_pathway(RegistrationPathway::ExamPrep);
    println!(
        "  Program cleared -> {:?}; options now {:?}",
        draft.value_of(RegistrationField::Program),
        draft.program_options()
    );

    match service.submit(&draft) {
        Err(RegistrationServiceError::Incomplete(err)) => {
            println!("  First submit rejected: {err}");
        }
        other => println!("  Unexpected first submit outcome: {other:?}"),
    }

    draft.set(RegistrationField::Program, "A/L ICT Regular");
    draft.set(RegistrationField::Email, "dulaj@example.lk");
    draft.set(RegistrationField::School, "Royal College");
    draft.set(RegistrationField::ExamYear, "2026");

    match service.submit(&draft) {
        Ok(receipt) => {
            println!(
                "- Registration accepted: {} ({} / {})",
                receipt.registration_id.0, receipt.pathway, receipt.program
            );
        }
        Err(err) => {
            println!("- Registration rejected: {err}");
            return Ok(());
        }
    }

    for record in sink.deliveries() {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("  Delivered to sink:\n{json}"),
            Err(err) => println!("  Delivered record unavailable: {err}"),
        }
    }

    Ok(())
}

fn render_lookup(state: &LookupQueryState) {
    match state {
        LookupQueryState::Resolved(record) => {
            let view = record.view();
            println!("  Authenticity verified: {}", view.reference);
            println!("    Holder:   {}", view.holder_name);
            println!("    Course:   {}", view.course_title);
            println!("    Issued:   {}", view.issue_date);
            println!("    Standing: {}", view.standing);
            println!("    URL:      {}", view.verification_url);
        }
        LookupQueryState::NotFound => {
            println!("  Verification failed: no matching record");
        }
        LookupQueryState::Unavailable(message) => {
            println!("  Registry unavailable: {message}");
        }
        LookupQueryState::Idle | LookupQueryState::Pending => {
            println!("  No lookup performed ({})", state.label());
        }
    }
}
