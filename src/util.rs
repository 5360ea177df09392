use regex::Regex;

/*
A function to get the instance name from a file path.

Example: file_path = ./benchmarks/uniform/uf20-01.cnf
            => instance_name = uf20-01.cnf

Returns the instance name.
*/
pub fn read_instance_name(file_path: &str) -> String {
    let re_get_instance = Regex::new(r"[^/\\]+$").unwrap();
    let instance_name = re_get_instance
        .find(file_path)
        .map(|found| found.as_str())
        .unwrap_or(file_path)
        .to_string();
    return instance_name;
}
