// LLM prompt constants for the career tree generator.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Career tree prompt template.
/// Placeholders: {advisor_persona}, {degree}, {interests}, {goals}, {json_only}
pub const CAREER_TREE_PROMPT_TEMPLATE: &str = r#"{advisor_persona}

Create a detailed career path tree in JSON format.

Based on this user profile:
- Degree: {degree}
- Interests: {interests}
- Goals: {goals}

Generate a JSON tree with this structure:
{
  "title": "Main Career Path",
  "description": "Brief description",
  "children": [
    {
      "title": "Sub-career path",
      "description": "Description",
      "children": []
    }
  ]
}

Each node should have:
- "title": The career path name
- "description": Brief explanation (optional)
- "children": Array of sub-paths (optional)

Create as many paths as you find necessary for the user to achieve their goals.
Make sure the user reaches the goal by following the path.
Add as many children or nodes as you think are possible for the user to achieve their goals.

{json_only}"#;
