pub const PROGRAM_NOT_RECOGNIZED: &str = "Not recognized";

pub const NOT_SPECIFIED: &str = "Not specified";

pub const NONE_LISTED: &str = "None";

pub const ADVISOR_PREAMBLE: &str = "You are an intelligent academic advisor helping a graduate student plan their next semester.";

pub const ELIGIBLE_COURSES_HEADER: &str = "Eligible courses offered this semester. Every course below is required for the student's degree, has its prerequisites satisfied by the completed courses, and has not been taken yet. Sections of the same course appear as separate entries; use the schedule fields to respect unavailable days.";

pub const NO_ELIGIBLE_COURSES: &str = "No offered course matched the student's degree requirements. Say so explicitly and suggest what the student should ask their advisor.";

pub const UNKNOWN_COMPLETED_NOTE: &str = "The student did not list any completed courses. Treat their completed courses as unknown and mention which prerequisites they should confirm before registering.";

pub const PLAN_INSTRUCTIONS: &str = "Generate an optimized course plan for this semester.
For each recommended course, list the course code, the course name, the number of credits, and a short reason for choosing it.
Ensure prerequisites are respected and the total number of credits does not exceed the student's preferred credit limit.
Do not recommend courses that are not in the eligible course list.";

pub const CLARIFICATION_REQUEST: &str = "Please tell me which degree program you are enrolled in (for example \"MS IESM\", \"MBA\", \"MPH\" or \"LL.M.\") so I can look up your requirements and this semester's offerings.";
