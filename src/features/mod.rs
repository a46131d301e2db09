pub mod grab_issues;
