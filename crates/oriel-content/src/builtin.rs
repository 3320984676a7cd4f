//! # Builtin Dataset
//!
//! The embedded Oriel content: four persona journeys, six smart systems,
//! and eleven building levels for the St Pancras eye care centre. This is
//! the dataset the shipped infographic renders; consumers that want a
//! different source construct their own [`ContentTable`] instead.

use crate::journey::{Journey, JourneyStep};
use crate::level::BuildingLevel;
use crate::system::SmartSystem;
use crate::table::ContentTable;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn step(
    id: &str,
    title: &str,
    location: &str,
    time: &str,
    physical: &str,
    digital: &[&str],
    background: &[&str],
    icon: &str,
) -> JourneyStep {
    JourneyStep {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        time: time.to_string(),
        physical: physical.to_string(),
        digital: strings(digital),
        background: strings(background),
        icon: icon.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn system(
    key: &str,
    title: &str,
    icon: &str,
    color: &str,
    description: &str,
    features: &[&str],
    integration: &str,
) -> SmartSystem {
    SmartSystem {
        key: key.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        features: strings(features),
        integration: integration.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn level(
    number: i32,
    name: &str,
    color: &str,
    description: &str,
    smart_features: &[&str],
    key_areas: &[&str],
    users: &[&str],
) -> BuildingLevel {
    BuildingLevel {
        level: number,
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        smart_features: strings(smart_features),
        key_areas: strings(key_areas),
        users: strings(users),
    }
}

impl ContentTable {
    /// The embedded Oriel dataset.
    pub fn builtin() -> Self {
        Self {
            journeys: vec![outpatient(), clinician(), surgical(), student()],
            systems: systems(),
            levels: levels(),
        }
    }
}

// ─── Journeys ────────────────────────────────────────────────────────

fn outpatient() -> Journey {
    Journey {
        key: "outpatient".to_string(),
        title: "Outpatient Journey".to_string(),
        persona: "Sarah, 58".to_string(),
        description: "Routine eye examination and prescription collection".to_string(),
        icon: "👁️".to_string(),
        color: "#0891B2".to_string(),
        gradient: "from-cyan-500 to-teal-600".to_string(),
        steps: vec![
            step(
                "arrival",
                "Smart Arrival",
                "Main Entrance",
                "09:15",
                "Patient enters through automated doors, detected by proximity sensors",
                &[
                    "Visitor Management recognizes appointment",
                    "Digital signage displays personalized welcome",
                    "Wayfinding activates on mobile app",
                ],
                &[
                    "Building adjusts climate based on occupancy",
                    "Security systems verify credentials",
                    "Real-time capacity monitoring updates",
                ],
                "🚪",
            ),
            step(
                "checkin",
                "Self-Service Check-in",
                "Reception Kiosk",
                "09:18",
                "Patient approaches check-in kiosk with touch-free interface",
                &[
                    "Biometric or QR code verification",
                    "Appointment details confirmed",
                    "Insurance/NHS number validated",
                    "Wait time displayed",
                ],
                &[
                    "Patient flow system updated",
                    "Clinic notified of arrival",
                    "Digital queue management initiated",
                ],
                "✅",
            ),
            step(
                "wayfinding",
                "Guided Navigation",
                "Corridors & Lifts",
                "09:20",
                "Patient follows digital breadcrumbs to clinic on Level 4",
                &[
                    "Step-by-step navigation on mobile",
                    "Dynamic signage adjusts to patient",
                    "Lift called automatically",
                    "Accessibility routes offered",
                ],
                &[
                    "RTLS tracks patient location",
                    "Clinic receives ETA notification",
                    "Room prepared for arrival",
                ],
                "🧭",
            ),
            step(
                "waiting",
                "Intelligent Waiting",
                "Eye Clinic Waiting Area",
                "09:25",
                "Patient seated in comfortable, well-lit waiting area",
                &[
                    "Real-time queue position on screen",
                    "Estimated wait time updated",
                    "Entertainment & health content available",
                    "Called via app notification",
                ],
                &[
                    "Environmental sensors adjust lighting",
                    "Air quality monitored",
                    "Occupancy tracked for social distancing",
                ],
                "⏳",
            ),
            step(
                "consultation",
                "Clinical Consultation",
                "Consultation Room 4B",
                "09:40",
                "Clinician reviews patient history on integrated display",
                &[
                    "Patient record accessed via HIE",
                    "Diagnostic equipment connected",
                    "Notes captured digitally",
                    "Prescriptions generated electronically",
                ],
                &[
                    "Room booking system marks occupied",
                    "Climate adjusted for procedure",
                    "Equipment sterilization logged",
                ],
                "👨‍⚕️",
            ),
            step(
                "pharmacy",
                "Pharmacy Collection",
                "Outpatient Pharmacy",
                "10:05",
                "Patient navigates to pharmacy using wayfinding",
                &[
                    "Prescription ready notification",
                    "Collection point assigned",
                    "Digital queue position",
                    "Medication information provided",
                ],
                &[
                    "Inventory management updated",
                    "Dispensing records logged",
                    "Follow-up appointments suggested",
                ],
                "💊",
            ),
            step(
                "departure",
                "Smart Departure",
                "Main Exit",
                "10:20",
                "Patient exits through automated doors",
                &[
                    "Visit summary sent to app",
                    "Feedback survey prompted",
                    "Follow-up appointment details",
                    "Transport options displayed",
                ],
                &[
                    "Visit analytics captured",
                    "Patient flow data updated",
                    "Satisfaction metrics collected",
                ],
                "👋",
            ),
        ],
    }
}

fn clinician() -> Journey {
    Journey {
        key: "clinician".to_string(),
        title: "Clinician Workflow".to_string(),
        persona: "Dr. James Chen".to_string(),
        description: "Consultant Ophthalmologist conducting morning clinic".to_string(),
        icon: "🩺".to_string(),
        color: "#7C3AED".to_string(),
        gradient: "from-violet-500 to-purple-600".to_string(),
        steps: vec![
            step(
                "arrival",
                "Staff Arrival",
                "Staff Entrance",
                "08:30",
                "Clinician enters via secure staff entrance",
                &[
                    "Badge access with RFID",
                    "Today's schedule displayed",
                    "Urgent messages highlighted",
                    "Room assignments confirmed",
                ],
                &[
                    "Access control logs entry",
                    "Fire system registers presence",
                    "Workstation prepared",
                ],
                "🏥",
            ),
            step(
                "briefing",
                "Digital Briefing",
                "Clinical Office",
                "08:35",
                "Reviews patient list and clinical priorities",
                &[
                    "Patient dashboard overview",
                    "Critical alerts flagged",
                    "Research notes accessible",
                    "Team communications hub",
                ],
                &[
                    "Room booking confirms office",
                    "Equipment availability checked",
                    "Support staff notified",
                ],
                "📋",
            ),
            step(
                "room_prep",
                "Room Preparation",
                "Consultation Room",
                "08:55",
                "Clinician enters allocated consultation room",
                &[
                    "Room automatically configured",
                    "Equipment powered up",
                    "Patient list loaded",
                    "Diagnostic tools ready",
                ],
                &[
                    "Climate optimized for procedures",
                    "Lighting adjusted",
                    "Sterilization status verified",
                ],
                "🔧",
            ),
            step(
                "patient_care",
                "Patient Consultations",
                "Consultation Room 4B",
                "09:00 - 12:30",
                "Conducts examinations and consultations",
                &[
                    "One-click patient record access",
                    "AI-assisted diagnostics",
                    "Digital imaging integration",
                    "E-prescribing",
                ],
                &[
                    "Nurse call system active",
                    "Porter request available",
                    "Emergency protocols ready",
                ],
                "👁️",
            ),
            step(
                "collaboration",
                "MDT Collaboration",
                "Meeting Room Level 6",
                "12:45",
                "Joins multidisciplinary team meeting",
                &[
                    "AV equipment auto-configured",
                    "Case presentations on display",
                    "Remote participants connected",
                    "Digital whiteboard active",
                ],
                &[
                    "Room booking managed transition",
                    "Catering notification sent",
                    "Recording compliance checked",
                ],
                "👥",
            ),
            step(
                "research",
                "Research Integration",
                "UCL Research Wing",
                "14:00",
                "Accesses research facilities and data",
                &[
                    "Unified data platform access",
                    "Patient consent management",
                    "Trial recruitment dashboard",
                    "Publication tracking",
                ],
                &[
                    "Cross-site data sharing",
                    "Compliance monitoring",
                    "Grant management integration",
                ],
                "🔬",
            ),
            step(
                "handover",
                "Digital Handover",
                "Clinical Hub",
                "17:00",
                "Completes shift with comprehensive handover",
                &[
                    "Automated shift summary",
                    "Outstanding tasks flagged",
                    "On-call team notified",
                    "Patient status updates",
                ],
                &[
                    "Analytics dashboard updated",
                    "Resource utilization logged",
                    "Next day prep initiated",
                ],
                "🔄",
            ),
        ],
    }
}

fn surgical() -> Journey {
    Journey {
        key: "surgical".to_string(),
        title: "Surgical Pathway".to_string(),
        persona: "Michael, 72".to_string(),
        description: "Cataract surgery with pre-assessment and day case discharge".to_string(),
        icon: "🔬".to_string(),
        color: "#DC2626".to_string(),
        gradient: "from-red-500 to-rose-600".to_string(),
        steps: vec![
            step(
                "preassess",
                "Pre-Assessment",
                "Pre-Op Suite",
                "Day -7",
                "Patient attends pre-operative assessment",
                &[
                    "Comprehensive health questionnaire",
                    "Risk scoring automated",
                    "Consent captured digitally",
                    "Surgery date confirmed",
                ],
                &[
                    "Theatre scheduling optimized",
                    "Equipment reserved",
                    "Blood tests ordered",
                ],
                "📝",
            ),
            step(
                "dayof_arrival",
                "Surgery Day Arrival",
                "Day Surgery Unit",
                "07:00",
                "Patient arrives for scheduled procedure",
                &[
                    "Priority check-in activated",
                    "Surgical checklist initiated",
                    "Wristband printed with QR",
                    "Family waiting area assigned",
                ],
                &[
                    "Theatre confirmed ready",
                    "Surgical team notified",
                    "Recovery bay allocated",
                ],
                "🌅",
            ),
            step(
                "prep",
                "Surgical Preparation",
                "Pre-Op Bay",
                "07:30",
                "Patient prepared for surgery",
                &[
                    "Vital signs auto-captured",
                    "Medication administered & logged",
                    "Surgeon reviews imaging",
                    "WHO checklist digital",
                ],
                &[
                    "Theatre status tracked",
                    "Equipment sterilization verified",
                    "Implant selection confirmed",
                ],
                "💉",
            ),
            step(
                "theatre",
                "Operating Theatre",
                "Theatre Suite Level 3",
                "08:15",
                "Procedure performed with integrated technology",
                &[
                    "Live surgical imaging",
                    "AI-assisted precision",
                    "Real-time documentation",
                    "Implant tracking logged",
                ],
                &[
                    "Environmental controls optimized",
                    "Emergency systems on standby",
                    "Time tracking active",
                ],
                "⚕️",
            ),
            step(
                "recovery",
                "Smart Recovery",
                "Recovery Suite",
                "09:00",
                "Post-operative monitoring and recovery",
                &[
                    "Continuous vital monitoring",
                    "Pain scores captured",
                    "Recovery milestones tracked",
                    "Family updates automated",
                ],
                &[
                    "Discharge planning initiated",
                    "Pharmacy notified",
                    "Transport arranged",
                ],
                "🛏️",
            ),
            step(
                "discharge",
                "Coordinated Discharge",
                "Discharge Lounge",
                "11:30",
                "Patient prepared for safe discharge",
                &[
                    "Discharge summary generated",
                    "Medication instructions provided",
                    "Follow-up booked automatically",
                    "GP notified electronically",
                ],
                &[
                    "Patient transport confirmed",
                    "Feedback survey sent",
                    "Bed management updated",
                ],
                "🏠",
            ),
        ],
    }
}

fn student() -> Journey {
    Journey {
        key: "student".to_string(),
        title: "Student Experience".to_string(),
        persona: "Priya Sharma".to_string(),
        description: "MSc Ophthalmology student attending lectures and clinical placements"
            .to_string(),
        icon: "🎓".to_string(),
        color: "#059669".to_string(),
        gradient: "from-emerald-500 to-green-600".to_string(),
        steps: vec![
            step(
                "campus_arrival",
                "Campus Arrival",
                "UCL Entrance Level 8",
                "08:45",
                "Student enters via dedicated UCL entrance",
                &[
                    "Student ID grants access",
                    "Timetable synced to display",
                    "Locker assignment shown",
                    "Campus map loaded",
                ],
                &[
                    "Attendance logged",
                    "Learning resources unlocked",
                    "Study spaces availability shown",
                ],
                "🚶",
            ),
            step(
                "lecture",
                "Smart Lecture Hall",
                "Lecture Theatre Level 9",
                "09:00",
                "Attends ophthalmology lecture",
                &[
                    "AV auto-configured for session",
                    "Lecture recording started",
                    "Interactive polling active",
                    "Materials auto-shared",
                ],
                &[
                    "Attendance captured",
                    "Room climate optimized",
                    "Accessibility features enabled",
                ],
                "📚",
            ),
            step(
                "simulation",
                "Simulation Lab",
                "Clinical Skills Centre",
                "11:00",
                "Practices surgical techniques",
                &[
                    "VR equipment personalized",
                    "Performance metrics tracked",
                    "AI feedback provided",
                    "Progress logged to portfolio",
                ],
                &[
                    "Equipment usage tracked",
                    "Sterilization scheduled",
                    "Booking system updated",
                ],
                "🥽",
            ),
            step(
                "clinical",
                "Clinical Placement",
                "Eye Clinic",
                "14:00",
                "Observes consultant clinic",
                &[
                    "Supervised access to records",
                    "Learning objectives tracked",
                    "Case log digitally captured",
                    "Mentor feedback recorded",
                ],
                &[
                    "Compliance verified",
                    "Supervision logged",
                    "Competency framework updated",
                ],
                "👨‍⚕️",
            ),
            step(
                "research",
                "Research Access",
                "Research Library Level 10",
                "16:00",
                "Accesses research databases and quiet study",
                &[
                    "Unified library access",
                    "Research data available",
                    "Collaboration tools active",
                    "Citation management",
                ],
                &[
                    "Study space booking managed",
                    "Printing credits tracked",
                    "Resource usage analytics",
                ],
                "📖",
            ),
        ],
    }
}

// ─── Smart Systems ───────────────────────────────────────────────────

fn systems() -> Vec<SmartSystem> {
    vec![
        system(
            "visitor_management",
            "Visitor Management",
            "👥",
            "#0891B2",
            "Intelligent visitor pre-registration, arrival detection, and host notification",
            &[
                "Pre-registration portal",
                "QR code check-in",
                "Host notifications",
                "Visitor badges",
                "Compliance tracking",
            ],
            "Connects with access control, wayfinding, and security systems",
        ),
        system(
            "self_checkin",
            "Self-Service Check-in",
            "✅",
            "#059669",
            "Touch-free patient registration with biometric and QR verification",
            &[
                "Kiosk and mobile options",
                "Identity verification",
                "Insurance validation",
                "Appointment confirmation",
                "Queue management",
            ],
            "Integrates with PAS, EPR, and patient flow systems via HIE",
        ),
        system(
            "wayfinding",
            "Digital Wayfinding",
            "🧭",
            "#7C3AED",
            "Turn-by-turn indoor navigation with real-time updates",
            &[
                "Mobile app guidance",
                "Accessibility routes",
                "Dynamic directions",
                "Estimated walk times",
                "Multilingual support",
            ],
            "Connected to room booking, clinic schedules, and RTLS",
        ),
        system(
            "signage",
            "Digital Signage",
            "📺",
            "#DC2626",
            "Context-aware displays throughout the building",
            &[
                "Dynamic content",
                "Emergency alerts",
                "Queue displays",
                "Health messaging",
                "Wayfinding integration",
            ],
            "Managed centrally with local override capabilities",
        ),
        system(
            "room_booking",
            "Room & Desk Booking",
            "🗓️",
            "#D97706",
            "Intelligent space management across clinical, research, and education areas",
            &[
                "Real-time availability",
                "Equipment booking",
                "Recurring meetings",
                "No-show detection",
                "Usage analytics",
            ],
            "Part of IWMS platform with IoT sensor verification",
        ),
        system(
            "control_centre",
            "Hospital Operations Centre",
            "🎛️",
            "#1D4ED8",
            "Unified command and control for all building operations",
            &[
                "Single pane of glass",
                "Real-time monitoring",
                "Incident management",
                "Resource coordination",
                "Predictive alerts",
            ],
            "Aggregates data from all smart systems via IOP",
        ),
    ]
}

// ─── Building Levels ─────────────────────────────────────────────────

fn levels() -> Vec<BuildingLevel> {
    vec![
        level(
            10,
            "Research Labs & UCL Offices",
            "#059669",
            "State-of-the-art research facilities for ophthalmology innovation",
            &[
                "Secure lab access control",
                "Environmental monitoring",
                "Data platform integration",
                "Collaboration spaces",
            ],
            &["Wet labs", "Dry labs", "Research offices", "Data analysis suites"],
            &["Researchers", "PhD students", "Lab technicians"],
        ),
        level(
            9,
            "Lecture Theatres & Seminar Rooms",
            "#059669",
            "Modern teaching spaces with integrated AV and recording capabilities",
            &[
                "Auto-configured AV systems",
                "Lecture capture",
                "Interactive displays",
                "Room booking panels",
            ],
            &["200-seat lecture theatre", "Seminar rooms", "Breakout spaces"],
            &["Students", "Educators", "Visiting speakers"],
        ),
        level(
            8,
            "UCL Entrance & Student Hub",
            "#059669",
            "Dedicated UCL entrance with student amenities and study spaces",
            &[
                "Student ID access",
                "Locker management",
                "Study space booking",
                "Digital noticeboards",
            ],
            &["Student reception", "Study pods", "Café area", "Lockers"],
            &["Students", "UCL staff", "Visitors"],
        ),
        level(
            7,
            "Private Patient Suite",
            "#7C3AED",
            "Premium private patient facilities with enhanced amenities",
            &[
                "Personalised room controls",
                "Premium wayfinding",
                "Concierge services",
                "Entertainment systems",
            ],
            &["Private consultation rooms", "VIP waiting", "Recovery suites"],
            &["Private patients", "Consultants", "Concierge staff"],
        ),
        level(
            6,
            "MDT & Conference Facilities",
            "#D97706",
            "Collaboration spaces for multidisciplinary team meetings",
            &[
                "Video conferencing",
                "Digital whiteboards",
                "Hybrid meeting support",
                "Catering integration",
            ],
            &["MDT rooms", "Board room", "Training suites", "Hot desks"],
            &["Clinical teams", "Management", "External partners"],
        ),
        level(
            5,
            "Diagnostic Imaging",
            "#0891B2",
            "Advanced imaging suite with integrated diagnostic equipment",
            &[
                "Equipment scheduling",
                "Image integration to EPR",
                "Patient flow tracking",
                "Results notification",
            ],
            &["OCT suites", "Imaging rooms", "Reading stations"],
            &["Patients", "Imaging technicians", "Clinicians"],
        ),
        level(
            4,
            "Outpatient Clinics",
            "#0891B2",
            "High-volume outpatient services with optimised patient flow",
            &[
                "Self-check-in kiosks",
                "Queue management",
                "Clinic dashboards",
                "Real-time wayfinding",
            ],
            &[
                "Consultation rooms",
                "Waiting areas",
                "Treatment rooms",
                "Nursing stations",
            ],
            &["Outpatients", "Consultants", "Nurses", "HCAs"],
        ),
        level(
            3,
            "Day Surgery & Theatres",
            "#DC2626",
            "Modern surgical facilities with integrated theatre systems",
            &[
                "Theatre scheduling",
                "Surgical checklists",
                "Equipment tracking",
                "Recovery monitoring",
            ],
            &["Operating theatres", "Pre-op", "Recovery", "Sterilisation"],
            &["Surgical patients", "Surgeons", "Anaesthetists", "Theatre staff"],
        ),
        level(
            2,
            "Emergency Eye Care",
            "#DC2626",
            "24/7 emergency eye services with rapid triage",
            &[
                "Priority check-in",
                "Triage system",
                "Urgent alerts",
                "Capacity monitoring",
            ],
            &["Triage", "Treatment bays", "Urgent care rooms", "Waiting area"],
            &["Emergency patients", "A&E clinicians", "Triage nurses"],
        ),
        level(
            1,
            "Main Entrance & Reception",
            "#1D4ED8",
            "Primary entrance with visitor management and wayfinding hub",
            &[
                "Visitor management",
                "Self-check-in",
                "Digital signage",
                "Wayfinding kiosks",
            ],
            &["Main reception", "Waiting area", "Information desk", "Retail"],
            &["All visitors", "Patients", "Reception staff"],
        ),
        level(
            0,
            "Pharmacy & Facilities",
            "#6B7280",
            "Outpatient pharmacy and building support services",
            &[
                "Prescription tracking",
                "Collection notifications",
                "Inventory management",
                "Facilities monitoring",
            ],
            &["Outpatient pharmacy", "FM hub", "Loading bay", "Plant rooms"],
            &["Patients", "Pharmacy staff", "Facilities team"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::ContentTable;

    #[test]
    fn test_builtin_journey_step_counts() {
        let table = ContentTable::builtin();
        let counts: Vec<(&str, usize)> = table
            .journeys
            .iter()
            .map(|j| (j.key.as_str(), j.steps.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("outpatient", 7),
                ("clinician", 7),
                ("surgical", 6),
                ("student", 5)
            ]
        );
    }

    #[test]
    fn test_builtin_system_keys_in_display_order() {
        let table = ContentTable::builtin();
        let keys: Vec<&str> = table.systems.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "visitor_management",
                "self_checkin",
                "wayfinding",
                "signage",
                "room_booking",
                "control_centre"
            ]
        );
    }

    #[test]
    fn test_builtin_steps_have_facets() {
        let table = ContentTable::builtin();
        for journey in &table.journeys {
            for step in &journey.steps {
                assert!(!step.digital.is_empty(), "{}/{}", journey.key, step.id);
                assert!(!step.background.is_empty(), "{}/{}", journey.key, step.id);
            }
        }
    }
}
