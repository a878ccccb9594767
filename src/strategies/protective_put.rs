/*
Protective Put Strategy

A protective put involves holding a long position in the underlying asset and buying a put option on that same asset.
This strategy provides unlimited upside potential while limiting downside risk.

Key characteristics:
- Unlimited profit potential
- Limits downside risk
- Acts as a form of insurance for the underlying asset
*/
