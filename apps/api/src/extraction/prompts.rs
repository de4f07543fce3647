// Extraction LLM prompt templates.
// All prompts for the extraction module are defined here.

use crate::llm_client::prompts::JSON_ONLY;

pub fn extraction_system() -> String {
    format!("You are an expert AI that extracts structured data from resumes. {JSON_ONLY}")
}

pub const EXTRACTION_PROMPT: &str = r#"Extract data from this resume and return it in the following JSON format:

{
  "professional_summary": "string",
  "personal_info": {
    "full_name": "string",
    "profession": "string",
    "email": "string",
    "phone": "string",
    "location": "string",
    "linkedin": "string",
    "website": "string"
  },
  "skills": ["skill1", "skill2"],
  "experience": [
    {
      "company": "string",
      "position": "string",
      "start_date": "string",
      "end_date": "string",
      "description": "string",
      "is_current": false
    }
  ],
  "education": [
    {
      "institution": "string",
      "degree": "string",
      "field": "string",
      "graduation_date": "string",
      "gpa": "string"
    }
  ],
  "project": [
    {
      "name": "string",
      "type": "string",
      "description": "string"
    }
  ]
}

Resume text:
{resume_text}

Return only the JSON:"#;
