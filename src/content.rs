//! Career Content Table
//!
//! Static page content, one entry per specialization. Pages render this
//! through the single `CareerPage` template; nothing here is fetched or
//! persisted.

use crate::models::{Resource, SalaryBand, Specialization};

pub static SPECIALIZATIONS: &[Specialization] = &[
    Specialization {
        slug: "api-developer",
        title: "API Developer",
        tagline: "Design and build the interfaces other software depends on.",
        overview: &[
            "API developers design, implement, and document the HTTP and RPC \
             interfaces that connect services, partners, and client apps. The \
             work sits between backend engineering and product design: an API \
             is a contract, and its shape outlives any one implementation.",
            "Day to day this means modeling resources, versioning without \
             breaking consumers, and making failure modes predictable.",
        ],
        responsibilities: &[
            "Design REST/GraphQL endpoints and keep their contracts stable",
            "Write and maintain OpenAPI or schema documentation",
            "Implement authentication, rate limiting, and input validation",
            "Monitor latency and error budgets for public endpoints",
            "Coordinate deprecations and version migrations with consumers",
        ],
        skills: &[
            "HTTP semantics and REST design",
            "JSON Schema / OpenAPI",
            "One server stack in depth (Node, Go, Rust, or JVM)",
            "Authentication protocols (OAuth 2.0, JWT)",
            "SQL and basic data modeling",
            "API testing and contract-test tooling",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$65,000 – $90,000" },
            SalaryBand { level: "Mid-level", range: "$90,000 – $125,000" },
            SalaryBand { level: "Senior", range: "$125,000 – $165,000" },
        ],
        resources: &[
            Resource { title: "RESTful Web APIs (Richardson & Amundsen)", url: "https://www.oreilly.com/library/view/restful-web-apis/9781449359713/" },
            Resource { title: "OpenAPI Specification", url: "https://spec.openapis.org/oas/latest.html" },
            Resource { title: "web.dev — HTTP fundamentals", url: "https://developer.mozilla.org/en-US/docs/Web/HTTP" },
        ],
    },
    Specialization {
        slug: "cloud-architect",
        title: "Cloud Architect",
        tagline: "Shape the infrastructure that product teams build on.",
        overview: &[
            "Cloud architects translate product and compliance requirements \
             into concrete infrastructure: account topology, networking, \
             identity, and the managed services teams are allowed to reach \
             for. Good architecture keeps the common path cheap and the \
             failure path rehearsed.",
            "The role is as much about guardrails and cost visibility as it \
             is about diagrams.",
        ],
        responsibilities: &[
            "Define landing zones, network layout, and identity boundaries",
            "Review designs for availability, cost, and security trade-offs",
            "Codify infrastructure with Terraform or CloudFormation",
            "Plan multi-region and disaster-recovery strategies",
            "Track and reduce cloud spend across teams",
        ],
        skills: &[
            "One major provider in depth (AWS, Azure, or GCP)",
            "Infrastructure as code (Terraform)",
            "VPC networking, DNS, and TLS",
            "IAM and least-privilege design",
            "Kubernetes and container platforms",
            "Capacity planning and cost modeling",
        ],
        salaries: &[
            SalaryBand { level: "Mid-level", range: "$115,000 – $150,000" },
            SalaryBand { level: "Senior", range: "$150,000 – $190,000" },
            SalaryBand { level: "Principal", range: "$190,000 – $240,000" },
        ],
        resources: &[
            Resource { title: "AWS Well-Architected Framework", url: "https://aws.amazon.com/architecture/well-architected/" },
            Resource { title: "Designing Data-Intensive Applications (Kleppmann)", url: "https://dataintensive.net/" },
            Resource { title: "Google SRE Book", url: "https://sre.google/sre-book/table-of-contents/" },
        ],
    },
    Specialization {
        slug: "c-cpp-developer",
        title: "C/C++ Developer",
        tagline: "Work where software meets the machine.",
        overview: &[
            "C and C++ developers build the systems everything else runs on: \
             operating systems, game engines, databases, embedded firmware, \
             and high-frequency trading stacks. Performance and memory \
             behavior are part of the requirements, not an afterthought.",
            "The craft rewards people who enjoy knowing exactly what the \
             hardware is doing with their code.",
        ],
        responsibilities: &[
            "Implement performance-critical components and libraries",
            "Profile CPU and memory behavior and remove bottlenecks",
            "Hunt memory-safety bugs with sanitizers and fuzzing",
            "Maintain build systems (CMake) across platforms",
            "Review code for undefined behavior and API misuse",
        ],
        skills: &[
            "Modern C++ (RAII, move semantics, templates)",
            "Memory models and concurrency primitives",
            "Profilers and debuggers (perf, gdb, valgrind)",
            "CMake and cross-platform builds",
            "Operating-system and hardware fundamentals",
            "Unit testing in C++ (GoogleTest, Catch2)",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$70,000 – $95,000" },
            SalaryBand { level: "Mid-level", range: "$95,000 – $135,000" },
            SalaryBand { level: "Senior", range: "$135,000 – $180,000" },
        ],
        resources: &[
            Resource { title: "A Tour of C++ (Stroustrup)", url: "https://www.stroustrup.com/tour3.html" },
            Resource { title: "cppreference", url: "https://en.cppreference.com/" },
            Resource { title: "Effective Modern C++ (Meyers)", url: "https://www.oreilly.com/library/view/effective-modern-c/9781491908419/" },
        ],
    },
    Specialization {
        slug: "cybersecurity-specialist",
        title: "Cybersecurity Specialist",
        tagline: "Find the weaknesses before someone else does.",
        overview: &[
            "Security specialists assess, harden, and monitor systems against \
             attack. The field splits into offense (penetration testing, red \
             teams), defense (detection, response, hardening), and governance \
             (risk, compliance), with most roles blending at least two.",
            "Curiosity and a habit of asking \"what happens if I do the wrong \
             thing here?\" matter more than any single certification.",
        ],
        responsibilities: &[
            "Run vulnerability assessments and penetration tests",
            "Triage alerts and investigate suspected incidents",
            "Harden configurations, networks, and CI/CD pipelines",
            "Review application code for common vulnerability classes",
            "Train engineering teams on secure development practice",
        ],
        skills: &[
            "Networking and OS internals",
            "Web vulnerability classes (OWASP Top 10)",
            "Scripting for automation (Python, Bash)",
            "Security tooling (Burp Suite, nmap, Wireshark)",
            "Threat modeling",
            "Incident response process",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$75,000 – $100,000" },
            SalaryBand { level: "Mid-level", range: "$100,000 – $140,000" },
            SalaryBand { level: "Senior", range: "$140,000 – $185,000" },
        ],
        resources: &[
            Resource { title: "OWASP Top 10", url: "https://owasp.org/www-project-top-ten/" },
            Resource { title: "The Web Application Hacker's Handbook", url: "https://portswigger.net/web-security" },
            Resource { title: "Hack The Box", url: "https://www.hackthebox.com/" },
        ],
    },
    Specialization {
        slug: "database-developer",
        title: "Database Developer",
        tagline: "Make the data layer fast, correct, and durable.",
        overview: &[
            "Database developers design schemas, tune queries, and keep the \
             storage layer honest under growth. They sit close to both \
             application teams (query patterns) and operations (backups, \
             replication, failover).",
            "The best ones think in data lifetimes: how a row is born, \
             mutated, indexed, archived, and eventually deleted.",
        ],
        responsibilities: &[
            "Design normalized schemas and sensible denormalizations",
            "Tune slow queries with plans, indexes, and statistics",
            "Plan migrations that run without downtime",
            "Operate replication, backups, and point-in-time recovery",
            "Set and enforce data-retention policies",
        ],
        skills: &[
            "Advanced SQL and query planning",
            "One engine in depth (PostgreSQL, MySQL, or SQL Server)",
            "Indexing strategies and transaction isolation",
            "Migration tooling and zero-downtime patterns",
            "A scripting language for ETL work",
            "Monitoring and capacity forecasting",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$65,000 – $90,000" },
            SalaryBand { level: "Mid-level", range: "$90,000 – $120,000" },
            SalaryBand { level: "Senior", range: "$120,000 – $160,000" },
        ],
        resources: &[
            Resource { title: "PostgreSQL Documentation", url: "https://www.postgresql.org/docs/" },
            Resource { title: "SQL Performance Explained (Winand)", url: "https://use-the-index-luke.com/" },
            Resource { title: "Database Internals (Petrov)", url: "https://www.databass.dev/" },
        ],
    },
    Specialization {
        slug: "devops-engineer",
        title: "DevOps Engineer",
        tagline: "Own the path from commit to production.",
        overview: &[
            "DevOps engineers build and run the delivery machinery: CI/CD \
             pipelines, container platforms, observability, and the \
             automation that keeps deploys boring. The goal is short feedback \
             loops with production safety as a property of the system, not of \
             individual heroics.",
            "Expect to write as much code as an application engineer, just \
             aimed at infrastructure.",
        ],
        responsibilities: &[
            "Build and maintain CI/CD pipelines",
            "Operate Kubernetes or equivalent runtime platforms",
            "Define infrastructure as code and keep drift out",
            "Instrument services with metrics, logs, and traces",
            "Run incident response and blameless postmortems",
        ],
        skills: &[
            "Linux administration and shell fluency",
            "Containers and orchestration (Docker, Kubernetes)",
            "CI/CD systems (GitHub Actions, GitLab CI)",
            "Terraform or another IaC tool",
            "Observability stacks (Prometheus, Grafana)",
            "A general-purpose language (Go or Python)",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$75,000 – $100,000" },
            SalaryBand { level: "Mid-level", range: "$100,000 – $140,000" },
            SalaryBand { level: "Senior", range: "$140,000 – $180,000" },
        ],
        resources: &[
            Resource { title: "The DevOps Handbook", url: "https://itrevolution.com/product/the-devops-handbook-second-edition/" },
            Resource { title: "Kubernetes Documentation", url: "https://kubernetes.io/docs/home/" },
            Resource { title: "Accelerate (Forsgren, Humble, Kim)", url: "https://itrevolution.com/product/accelerate/" },
        ],
    },
    Specialization {
        slug: "fullstack-developer",
        title: "Fullstack Developer",
        tagline: "Ship features end to end, browser to database.",
        overview: &[
            "Fullstack developers carry a feature from UI mockup through API \
             and schema to deployment. Breadth is the point: they are rarely \
             the deepest specialist in the room, but they remove the \
             hand-off friction that slows small teams down.",
            "Most fullstack roles anchor on JavaScript/TypeScript with one \
             backend stack alongside it.",
        ],
        responsibilities: &[
            "Build UI components and the endpoints that feed them",
            "Model data and write the migrations features need",
            "Write integration tests across the stack",
            "Deploy, monitor, and debug features in production",
            "Pair with design on feasibility and with backend on contracts",
        ],
        skills: &[
            "JavaScript/TypeScript and a component framework",
            "HTTP, REST, and browser fundamentals",
            "A backend framework and its ORM",
            "SQL basics and schema design",
            "Git workflows and code review habits",
            "CSS layout and accessibility basics",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$65,000 – $90,000" },
            SalaryBand { level: "Mid-level", range: "$90,000 – $130,000" },
            SalaryBand { level: "Senior", range: "$130,000 – $170,000" },
        ],
        resources: &[
            Resource { title: "MDN Web Docs", url: "https://developer.mozilla.org/" },
            Resource { title: "Fullstack Open (University of Helsinki)", url: "https://fullstackopen.com/en/" },
            Resource { title: "The Pragmatic Programmer", url: "https://pragprog.com/titles/tpp20/the-pragmatic-programmer-20th-anniversary-edition/" },
        ],
    },
    Specialization {
        slug: "ios-developer",
        title: "iOS Developer",
        tagline: "Build for the device people check 100 times a day.",
        overview: &[
            "iOS developers build native applications for iPhone and iPad in \
             Swift. The platform rewards attention to detail: animation \
             timing, offline behavior, and memory discipline all show up \
             directly in reviews.",
            "Beyond the app itself, the job includes living with the App \
             Store: review cycles, entitlements, and release trains.",
        ],
        responsibilities: &[
            "Implement features in Swift with SwiftUI or UIKit",
            "Integrate REST APIs with robust offline handling",
            "Profile launch time, memory, and battery impact",
            "Automate builds, signing, and TestFlight distribution",
            "Shepherd releases through App Store review",
        ],
        skills: &[
            "Swift and its concurrency model",
            "SwiftUI and UIKit",
            "Core Data or other local persistence",
            "Networking and JSON handling",
            "Xcode instruments and debugging",
            "App Store release process",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$75,000 – $100,000" },
            SalaryBand { level: "Mid-level", range: "$100,000 – $140,000" },
            SalaryBand { level: "Senior", range: "$140,000 – $180,000" },
        ],
        resources: &[
            Resource { title: "Apple Developer Documentation", url: "https://developer.apple.com/documentation/" },
            Resource { title: "Hacking with Swift", url: "https://www.hackingwithswift.com/" },
            Resource { title: "Swift.org — The Swift Programming Language", url: "https://docs.swift.org/swift-book/" },
        ],
    },
    Specialization {
        slug: "iot-developer",
        title: "IoT Developer",
        tagline: "Put software on things that live in the physical world.",
        overview: &[
            "IoT developers work across an unusually wide stack: firmware on \
             constrained microcontrollers, radio and network protocols, and \
             the cloud services that collect and act on device data. Power \
             budgets and flaky connectivity shape every design decision.",
            "Debugging sometimes involves a logic analyzer instead of a stack \
             trace, which is either a nightmare or the best part, depending \
             on taste.",
        ],
        responsibilities: &[
            "Write and ship firmware for embedded targets",
            "Integrate sensors and actuators over I2C/SPI/UART",
            "Design device-to-cloud messaging (MQTT, CoAP)",
            "Build over-the-air update pipelines",
            "Test for power draw, connectivity loss, and recovery",
        ],
        skills: &[
            "C/C++ or Rust for embedded targets",
            "An RTOS (FreeRTOS, Zephyr)",
            "Electronics basics and datasheet reading",
            "MQTT and low-power networking (BLE, LoRa)",
            "Cloud IoT platforms",
            "Hardware debugging tools",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$70,000 – $95,000" },
            SalaryBand { level: "Mid-level", range: "$95,000 – $130,000" },
            SalaryBand { level: "Senior", range: "$130,000 – $170,000" },
        ],
        resources: &[
            Resource { title: "Zephyr Project Documentation", url: "https://docs.zephyrproject.org/latest/" },
            Resource { title: "Making Embedded Systems (White)", url: "https://www.oreilly.com/library/view/making-embedded-systems/9781449308889/" },
            Resource { title: "MQTT Specification", url: "https://mqtt.org/mqtt-specification/" },
        ],
    },
    Specialization {
        slug: "python-developer",
        title: "Python Developer",
        tagline: "One language from web backends to data pipelines.",
        overview: &[
            "Python developers build web services, automation, and data \
             tooling in the language with the ecosystem for almost \
             everything. Roles range from Django product work to pipeline \
             engineering with pandas and Airflow.",
            "The language is easy to start and deep to master; the \
             professionals are distinguished by testing habits, typing \
             discipline, and knowing when not to reach for a new dependency.",
        ],
        responsibilities: &[
            "Build and maintain services in Django, FastAPI, or Flask",
            "Write data processing jobs and automation scripts",
            "Type-annotate and test code for maintainability",
            "Package and deploy with modern tooling",
            "Profile and optimize hot paths",
        ],
        skills: &[
            "Idiomatic Python and its standard library",
            "A web framework (Django or FastAPI)",
            "Typing (mypy) and testing (pytest)",
            "SQL and an ORM (SQLAlchemy)",
            "Packaging and virtual environments",
            "Async programming with asyncio",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$65,000 – $90,000" },
            SalaryBand { level: "Mid-level", range: "$90,000 – $125,000" },
            SalaryBand { level: "Senior", range: "$125,000 – $165,000" },
        ],
        resources: &[
            Resource { title: "Fluent Python (Ramalho)", url: "https://www.oreilly.com/library/view/fluent-python-2nd/9781492056348/" },
            Resource { title: "Python Documentation", url: "https://docs.python.org/3/" },
            Resource { title: "FastAPI Documentation", url: "https://fastapi.tiangolo.com/" },
        ],
    },
    Specialization {
        slug: "android-developer",
        title: "Android Developer",
        tagline: "Reach the world's largest device install base.",
        overview: &[
            "Android developers build native apps in Kotlin for an ecosystem \
             spanning thousands of device models. Fragmentation is the \
             defining constraint: screen sizes, OS versions, and OEM quirks \
             all have to be survived gracefully.",
            "Modern Android centers on Kotlin, Jetpack Compose, and a \
             coroutine-first architecture.",
        ],
        responsibilities: &[
            "Build UI with Jetpack Compose",
            "Structure apps with ViewModel and coroutines/Flow",
            "Handle lifecycle, process death, and configuration changes",
            "Optimize startup time and APK size",
            "Release through Play Console staged rollouts",
        ],
        skills: &[
            "Kotlin and coroutines",
            "Jetpack Compose and the Jetpack libraries",
            "Dependency injection (Hilt)",
            "Local storage (Room, DataStore)",
            "Gradle build configuration",
            "Play Store release process",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$70,000 – $95,000" },
            SalaryBand { level: "Mid-level", range: "$95,000 – $135,000" },
            SalaryBand { level: "Senior", range: "$135,000 – $175,000" },
        ],
        resources: &[
            Resource { title: "Android Developers Documentation", url: "https://developer.android.com/docs" },
            Resource { title: "Kotlin Documentation", url: "https://kotlinlang.org/docs/home.html" },
            Resource { title: "Jetpack Compose Pathway", url: "https://developer.android.com/courses/pathways/compose" },
        ],
    },
    Specialization {
        slug: "machine-learning-engineer",
        title: "Machine Learning Engineer",
        tagline: "Turn models into products that survive production.",
        overview: &[
            "ML engineers take models from notebook to production: data \
             pipelines, training infrastructure, serving, and the monitoring \
             that catches drift before users do. The role blends software \
             engineering rigor with enough statistics to know when a metric \
             is lying.",
            "Most of the work is data plumbing and evaluation, not novel \
             architecture; the teams that accept this ship.",
        ],
        responsibilities: &[
            "Build training and feature pipelines",
            "Package and serve models behind stable APIs",
            "Evaluate models offline and run online experiments",
            "Monitor accuracy, latency, and data drift in production",
            "Manage datasets, labeling, and reproducibility",
        ],
        skills: &[
            "Python and the scientific stack (numpy, pandas)",
            "A deep-learning framework (PyTorch)",
            "Classical ML and evaluation methodology",
            "Data engineering basics (SQL, batch/stream jobs)",
            "Experiment tracking and model registries",
            "Containerized serving and GPU basics",
        ],
        salaries: &[
            SalaryBand { level: "Junior", range: "$95,000 – $125,000" },
            SalaryBand { level: "Mid-level", range: "$125,000 – $165,000" },
            SalaryBand { level: "Senior", range: "$165,000 – $220,000" },
        ],
        resources: &[
            Resource { title: "Hands-On Machine Learning (Géron)", url: "https://www.oreilly.com/library/view/hands-on-machine-learning/9781098125967/" },
            Resource { title: "PyTorch Tutorials", url: "https://pytorch.org/tutorials/" },
            Resource { title: "Designing Machine Learning Systems (Huyen)", url: "https://www.oreilly.com/library/view/designing-machine-learning/9781098107956/" },
        ],
    },
];

/// Look up a specialization by its URL slug
pub fn find(slug: &str) -> Option<&'static Specialization> {
    SPECIALIZATIONS.iter().find(|entry| entry.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let mut seen = HashSet::new();
        for entry in SPECIALIZATIONS {
            assert!(seen.insert(entry.slug), "duplicate slug {}", entry.slug);
        }
    }

    #[test]
    fn find_resolves_known_slugs() {
        let entry = find("devops-engineer").expect("devops page exists");
        assert_eq!(entry.title, "DevOps Engineer");
        assert!(find("underwater-basket-weaver").is_none());
    }

    #[test]
    fn every_entry_has_complete_sections() {
        for entry in SPECIALIZATIONS {
            assert!(!entry.overview.is_empty(), "{} overview", entry.slug);
            assert!(!entry.responsibilities.is_empty(), "{} responsibilities", entry.slug);
            assert!(!entry.skills.is_empty(), "{} skills", entry.slug);
            assert!(!entry.salaries.is_empty(), "{} salaries", entry.slug);
            assert!(!entry.resources.is_empty(), "{} resources", entry.slug);
        }
    }

    #[test]
    fn resource_links_are_absolute() {
        for entry in SPECIALIZATIONS {
            for resource in entry.resources {
                assert!(resource.url.starts_with("https://"), "{}", resource.url);
            }
        }
    }
}
