use criterion::{criterion_group, criterion_main, Criterion};
use timetable_solver::types::{
    Catalog, Course, CourseId, CourseOffering, Instructor, InstructorId, NaiveTimeOfDay, Room, RoomId, RoomKind,
    Section, SectionId, SlotId, SolverConfig, TimeSlot,
};

/// Builds a synthetic catalog large enough to exercise both solver phases:
/// several courses, a handful of sections per department, and enough
/// rooms/time slots to keep every session's domain non-trivial.
fn synthetic_catalog(sections_per_department: usize) -> Catalog {
    let days = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];
    let mut time_slots = Vec::new();
    let mut id = 0u32;
    for day in days {
        for hour in 8..16 {
            time_slots.push(TimeSlot {
                id: SlotId(id),
                day: day.into(),
                start: NaiveTimeOfDay { hour, minute: 0 },
                end: NaiveTimeOfDay { hour: hour + 1, minute: 0 },
            });
            id += 1;
        }
    }

    let rooms = vec![
        Room {
            id: RoomId("Hall-A 101".into()),
            capacity: 100,
            kind: RoomKind::Lecture,
            space_type: "Standard".into(),
        },
        Room {
            id: RoomId("Hall-A 102".into()),
            capacity: 80,
            kind: RoomKind::Lecture,
            space_type: "Standard".into(),
        },
        Room {
            id: RoomId("Hall-B 201".into()),
            capacity: 40,
            kind: RoomKind::Lab,
            space_type: "Computer".into(),
        },
    ];

    let instructors = vec![
        Instructor {
            id: InstructorId("i1".into()),
            name: "Dr. A".into(),
            qualified_course_ids: [CourseId("c1".into())].into_iter().collect(),
            not_preferred_slots: Default::default(),
        },
        Instructor {
            id: InstructorId("i2".into()),
            name: "Dr. B".into(),
            qualified_course_ids: [CourseId("c1".into())].into_iter().collect(),
            not_preferred_slots: Default::default(),
        },
    ];

    let courses = vec![Course {
        id: CourseId("c1".into()),
        name: "Benchmark Course".into(),
        lecture_duration_slots: 2,
        lab_duration_slots: 0,
        lab_space_type: None,
    }];

    let mut sections = Vec::new();
    for i in 0..sections_per_department {
        sections.push(Section {
            id: SectionId(format!("s{i}")),
            department: "CS".into(),
            level: "1".into(),
            specialization: "Core".into(),
            student_count: 20,
        });
    }

    let offerings = vec![CourseOffering {
        department: "CS".into(),
        level: "1".into(),
        specialization: "Core".into(),
        course_id: CourseId("c1".into()),
        preferred_professor: None,
        preferred_assistants: Default::default(),
    }];

    Catalog {
        courses,
        rooms,
        instructors,
        time_slots,
        sections,
        offerings,
    }
}

fn bench_generate_timetable(c: &mut Criterion) {
    let catalog = synthetic_catalog(6);
    let mut config = SolverConfig::default();
    config.annealing.iterations = 500;

    c.bench_function("generate_timetable_small", |b| {
        b.iter(|| timetable_solver::scheduler::generate_timetable(&catalog, &config, true).unwrap())
    });
}

criterion_group!(benches, bench_generate_timetable);
criterion_main!(benches);
