/// Creates a shader module from WGSL source and reports compiler diagnostics.
///
/// Errors are logged and the module is returned anyway: a broken shader produces
/// broken draws, not a halted program.
pub fn compile_shader(device: &wgpu::Device, label: &str, wgsl: &str) -> wgpu::ShaderModule {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(wgsl.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    for msg in &info.messages {
        let at = msg
            .location
            .as_ref()
            .map(|loc| format!(" at {}:{}", loc.line_number, loc.line_position))
            .unwrap_or_default();

        match msg.message_type {
            wgpu::CompilationMessageType::Error => {
                log::error!("{label} shader compilation failed{at}:\n{}", msg.message);
            }
            wgpu::CompilationMessageType::Warning => {
                log::warn!("{label} shader{at}: {}", msg.message);
            }
            _ => {
                log::debug!("{label} shader{at}: {}", msg.message);
            }
        }
    }

    module
}
