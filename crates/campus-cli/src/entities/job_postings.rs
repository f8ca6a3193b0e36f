//! Job posting screens

use campus_engine::Column;
use campus_forms::{FieldDescriptor, FieldType, FormSchema, SelectOption};

use super::EntityConfig;

pub fn job_postings() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("title", "Job Title", FieldType::Text).required(),
        FieldDescriptor::new("department_id", "Department", FieldType::SearchSelect)
            .remote("/departments", "id", "name"),
        FieldDescriptor::new("description", "Description", FieldType::Textarea),
        FieldDescriptor::new("employment_type", "Employment Type", FieldType::Select)
            .options(vec![
                SelectOption::new("full_time", "Full Time"),
                SelectOption::new("part_time", "Part Time"),
                SelectOption::new("contract", "Contract"),
            ])
            .default_value("full_time"),
        FieldDescriptor::new("application_deadline", "Application Deadline", FieldType::Date),
        FieldDescriptor::new("is_published", "Published", FieldType::Checkbox),
    ];
    EntityConfig {
        endpoint: "/job-postings",
        schema: FormSchema::new(fields),
        columns: vec![
            Column::new("title", "Title"),
            Column::new("employment_type", "Type"),
            Column::new("application_deadline", "Deadline"),
            Column::new("is_published", "Published"),
        ],
    }
}
